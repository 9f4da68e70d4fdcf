// ABOUTME: Parser module for the Lisb grammar (number/symbol/qexpr/sexpr)

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit1, multispace0},
    combinator::{opt, recognize},
    multi::many0,
    sequence::{delimited, preceded},
    IResult, Parser,
};

/// A labelled parse-tree node, the direct analogue of the `mpc_ast_t` tree
/// the reference grammar (§6.1) hands to the reader: interior nodes carry
/// a tag (`"sexpr"`, `"qexpr"`, or the root tag `">"`), leaves carry a tag
/// (`"number"`, `"symbol"`) plus their matched text. `reader.rs` is the
/// only consumer; this module knows nothing about `Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf { tag: &'static str, text: String },
    Interior { tag: &'static str, children: Vec<Node> },
}

fn ws(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

/// `number : /-?[0-9]+/`
fn number(input: &str) -> IResult<&str, Node> {
    let (input, text) = recognize((opt(char('-')), digit1)).parse(input)?;
    Ok((
        input,
        Node::Leaf {
            tag: "number",
            text: text.to_string(),
        },
    ))
}

/// `symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&]+/`
fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&".contains(c)
}

fn symbol(input: &str) -> IResult<&str, Node> {
    let (input, text) = take_while1(is_symbol_char)(input)?;
    Ok((
        input,
        Node::Leaf {
            tag: "symbol",
            text: text.to_string(),
        },
    ))
}

/// `qexpr : '{' <expr>* '}'`
fn qexpr(input: &str) -> IResult<&str, Node> {
    let (input, children) = delimited(
        char('{'),
        many0(preceded(ws, expr)),
        preceded(ws, char('}')),
    )
    .parse(input)?;
    Ok((
        input,
        Node::Interior {
            tag: "qexpr",
            children,
        },
    ))
}

/// `sexpr : '(' <expr>* ')'`
fn sexpr(input: &str) -> IResult<&str, Node> {
    let (input, children) = delimited(
        char('('),
        many0(preceded(ws, expr)),
        preceded(ws, char(')')),
    )
    .parse(input)?;
    Ok((
        input,
        Node::Interior {
            tag: "sexpr",
            children,
        },
    ))
}

/// `expr : <number> | <symbol> | <qexpr> | <sexpr>`
///
/// Order matters: `number` is tried before `symbol` since the symbol
/// alphabet is a superset of the digit/`-` alphabet. A bare `-` (the
/// subtraction builtin's name) fails `number` (no digits follow) and
/// falls through to `symbol`.
fn expr(input: &str) -> IResult<&str, Node> {
    alt((number, symbol, qexpr, sexpr)).parse(input)
}

/// `program : <expr>*`
///
/// Parses every top-level form in `input` and wraps them under the root
/// tag `">"`, matching the reference grammar's anonymous root node. The
/// caller (reader/REPL) is responsible for evaluating each child
/// separately rather than evaluating the root as one big S-expression.
pub fn parse_program(input: &str) -> Result<Node, String> {
    let (rest, children) = many0(preceded(ws, expr))
        .parse(input)
        .map_err(|e| format!("Parse error: {e:?}"))?;
    let (rest, _) = ws(rest).map_err(|e: nom::Err<nom::error::Error<&str>>| format!("{e:?}"))?;
    if !rest.is_empty() {
        return Err(format!("Parse error: unexpected input '{rest}'"));
    }
    Ok(Node::Interior {
        tag: ">",
        children,
    })
}
