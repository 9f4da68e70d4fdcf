// ABOUTME: Converts the parser's labelled tree into a Value tree

use crate::parser::Node;
use crate::value::Value;

/// Punctuation leaves that carry no semantic content; the reference
/// reader (`lval_read`) discards these by comparing leaf text, and
/// separately discards any leaf tagged exactly `"regex"` (an artifact of
/// the mpc grammar that this recursive-descent parser never produces, but
/// the check is kept for fidelity with §4.3/§6.1).
fn is_skippable(node: &Node) -> bool {
    match node {
        Node::Leaf { tag, text } => *tag == "regex" || matches!(text.as_str(), "(" | ")" | "{" | "}"),
        Node::Interior { .. } => false,
    }
}

/// Converts one labelled node into a `Value`. Interior nodes become
/// `SList` (tag containing `"sexpr"`, or the root tag `">"`) or `QList`
/// (tag containing `"qexpr"`); leaves become `Number` (tag containing
/// `"number"`, with overflow surfaced as `Value::Error`) or `Symbol`
/// (anything else).
pub fn read(node: &Node) -> Value {
    match node {
        Node::Leaf { tag, text } => {
            if tag.contains("number") {
                match text.parse::<i64>() {
                    Ok(n) => Value::Number(n),
                    Err(_) => Value::Error(format!("Invalid Number '{text}'")),
                }
            } else {
                Value::Symbol(text.clone())
            }
        }
        Node::Interior { tag, children } => {
            let items: Vec<Value> = children
                .iter()
                .filter(|c| !is_skippable(c))
                .map(read)
                .collect();
            if *tag == ">" {
                Value::SList(items)
            } else if tag.contains("qexpr") {
                Value::QList(items)
            } else {
                Value::SList(items)
            }
        }
    }
}

/// Parses and reads `input` into the root `SList` of top-level forms,
/// one `Value` per top-level expression. The caller evaluates each child
/// separately — the root itself is never a callable form.
pub fn read_program(input: &str) -> Result<Vec<Value>, String> {
    let node = crate::parser::parse_program(input)?;
    match read(&node) {
        Value::SList(items) => Ok(items),
        other => Ok(vec![other]),
    }
}
