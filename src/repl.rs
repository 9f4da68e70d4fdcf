// ABOUTME: Interactive read-eval-print loop (out of scope for the core, shipped regardless)

use crate::config::{BANNER_LINE_1, BANNER_LINE_2, HISTORY_FILE, PROMPT};
use crate::env::Environment;
use crate::eval::eval;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::rc::Rc;

/// Runs the REPL to completion. Each line may contain several top-level
/// forms (§6.1's `program : <expr>*`); each is evaluated in turn against
/// the same, persistent root environment and printed on its own line,
/// matching "data flow per REPL turn" when a turn happens to contain more
/// than one form.
pub fn run(env: Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = DefaultEditor::with_config(config)?;
    let _ = rl.load_history(HISTORY_FILE);

    println!("{BANNER_LINE_1}");
    println!("{BANNER_LINE_2}");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match crate::reader::read_program(&line) {
                    Ok(forms) => {
                        for form in forms {
                            println!("{}", eval(&env, form));
                        }
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
    Ok(())
}

/// Evaluates every top-level form in a script file in order against one
/// environment, printing each result the way the REPL would (§1/§5).
pub fn run_script(path: &std::path::Path, env: Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read script file {}: {e}", path.display()))?;
    match crate::reader::read_program(&contents) {
        Ok(forms) => {
            for form in forms {
                let result = eval(&env, form);
                println!("{result}");
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
