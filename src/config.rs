// ABOUTME: Fixed strings the REPL and CLI are built around (banner, prompt, history)

/// `clap`'s `--version` output.
pub const VERSION: &str = "0.0.1";

pub const BANNER_LINE_1: &str = "Lisb Version 0.0.1";
pub const BANNER_LINE_2: &str = "Press Ctrl+C to Exit";

pub const PROMPT: &str = "lisb> ";

/// `rustyline` history file, written in the current directory.
pub const HISTORY_FILE: &str = ".lisb_history";
