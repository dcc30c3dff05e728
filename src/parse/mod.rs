pub mod ast;
mod error;
mod lexer;
mod methods;
mod operands;

pub use error::ParseError;

/// Lexes `source` into a sequence of bound top-level nodes.
///
/// Function calls are hoisted first, then the remaining words are classified
/// and every operator is bound to its neighbours.
pub fn lex(source: &str) -> Result<Vec<ast::Node>, ParseError> {
    let mut table = lexer::MethodTable::default();
    let hoisted = methods::hoist(source, &mut table)?;
    let tokens = lexer::tokenize(&hoisted, &mut table)?;
    let unrecognized = tokens.iter().find_map(|token| match token {
        lexer::Token::Other(word) => Some(format!("unrecognized token `{}`", word)),
        _ => None,
    });
    let nodes = operands::resolve(tokens)?;

    if nodes.is_empty() {
        let reason = unrecognized.unwrap_or_else(|| "nothing to roll".to_owned());
        return Err(ParseError::malformed(source, reason));
    }
    Ok(nodes)
}
