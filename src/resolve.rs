//! Roll-map lookup and `$variable` substitution, applied to notation before it
//! is lexed.

use crate::config::{RollMap, Variables};
use crate::roll::{RResult, RollError};

/// Characters that mark input as notation rather than a roll-map path.
fn looks_like_notation(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')')
}

/// Returns the notation `input` names in `map`, or `input` itself if it is
/// not a lookup.
///
/// Input that cannot be anything but a lookup (a dotted path, or a bare word
/// without digits or operators) must resolve.
pub fn lookup<'a>(input: &'a str, map: &'a RollMap) -> RResult<&'a str> {
    if let Some(notation) = map.lookup(input.split('.')) {
        tracing::debug!(path = input, notation, "resolved roll mapping");
        return Ok(notation);
    }

    if input.contains('.') || !input.contains(looks_like_notation) {
        return Err(RollError::UndefinedRollMapping(input.to_owned()));
    }
    Ok(input)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replaces every `$name` in `notation` with the value of `name`.
///
/// Values never contain `$`, so substituting twice changes nothing.
pub fn substitute(notation: &str, variables: &Variables) -> RResult<String> {
    let mut out = String::with_capacity(notation.len());
    let mut rest = notation;

    while let Some(start) = rest.find('$') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());
        if len == 0 {
            out.push('$');
        } else {
            let name = &after[..len];
            let value = variables
                .get(name)
                .ok_or_else(|| RollError::UndefinedVariable(name.to_owned()))?;
            out.push_str(&value.to_string());
        }
        rest = &after[len..];
    }
    out.push_str(rest);

    Ok(out)
}

/// Resolves `input` against the roll map, then substitutes its variables.
pub fn resolve(input: &str, map: &RollMap, variables: &Variables) -> RResult<String> {
    substitute(lookup(input, map)?, variables)
}
