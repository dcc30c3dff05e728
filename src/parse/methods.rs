use super::ast::Method;
use super::error::ParseError;
use super::lexer::{self, MethodTable};
use super::operands;
use crate::common::Function;
use std::ops::Range;

/// A `name(...)` call found in the source.
#[derive(Debug, PartialEq)]
struct Call {
    /// From the first byte of the name to the closing parenthesis, inclusive.
    span: Range<usize>,
    name: Range<usize>,
    args: Range<usize>,
}

/// Replaces every function call in `source` with a placeholder, registering
/// the parsed call in `methods`.
///
/// Arguments are hoisted before their call is registered, so nested calls
/// always receive lower indices than the calls that contain them. Each pass
/// removes one call from the source, so the loop terminates.
pub(crate) fn hoist(source: &str, methods: &mut MethodTable) -> Result<String, ParseError> {
    let mut source = source.to_owned();

    while let Some(call) = find_call(&source)? {
        let name = &source[call.name.clone()];
        let function: Function = name
            .parse()
            .map_err(|_| ParseError::UnknownFunction(name.to_owned()))?;

        let mut parameters = Vec::new();
        for arg in split_args(&source[call.args.clone()]) {
            let arg = hoist(arg, methods)?;
            let tokens = lexer::tokenize(&arg, methods)?;
            parameters.extend(operands::resolve(tokens)?);
        }

        let placeholder = methods.register(Method::new(function, parameters));
        source.replace_range(call.span, &format!(" {} ", placeholder));
    }

    Ok(source)
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Finds the leftmost parenthesis that directly follows a name.
fn find_call(source: &str) -> Result<Option<Call>, ParseError> {
    let bytes = source.as_bytes();

    for (open, _) in source.match_indices('(') {
        let start = bytes[..open]
            .iter()
            .rposition(|&b| !is_name_byte(b))
            .map_or(0, |i| i + 1);
        if start == open || (start > 0 && bytes[start - 1] == b'$') {
            continue;
        }

        let close = matching_paren(source, open)
            .ok_or_else(|| ParseError::malformed(source.trim(), "unbalanced parentheses"))?;
        return Ok(Some(Call {
            span: start..close + 1,
            name: start..open,
            args: open + 1..close,
        }));
    }

    Ok(None)
}

fn matching_paren(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in source[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits an argument list on commas that are not inside a nested call.
fn split_args(args: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0usize;
    let mut start = 0;
    let mut pieces = Vec::new();
    for (i, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&args[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&args[start..]);
    pieces.into_iter().map(str::trim).filter(|arg| !arg.is_empty())
}
