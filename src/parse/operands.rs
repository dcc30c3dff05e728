use super::ast::Node;
use super::error::ParseError;
use super::lexer::Token;
use crate::common::BinaryOperator;

/// Binds every operator to its neighbours in a single left-to-right pass.
///
/// Binding follows adjacency only, not precedence: an operator whose left
/// neighbour was already taken by the previous operator takes that operator's
/// tree instead, so `2 + 3 * 4` means `(2 + 3) * 4`. Unclassified words are
/// dropped once they are known not to be operands.
pub(crate) fn resolve(tokens: Vec<Token>) -> Result<Vec<Node>, ParseError> {
    let mut bound: Vec<Node> = Vec::with_capacity(tokens.len());
    let mut left_is_operand = false;
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        match token {
            Token::Node(node) => {
                bound.push(node);
                left_is_operand = true;
            }
            Token::Operator(op) => {
                let left = match bound.pop() {
                    Some(left) if left_is_operand => left,
                    _ => return Err(missing_operand(op, "left")),
                };
                let right = match tokens.next() {
                    Some(Token::Node(right)) => right,
                    _ => return Err(missing_operand(op, "right")),
                };
                bound.push(Node::binary(left, op, right));
                left_is_operand = true;
            }
            Token::Other(word) => {
                tracing::debug!(%word, "ignoring unrecognized token");
                left_is_operand = false;
            }
        }
    }

    Ok(bound)
}

fn missing_operand(op: BinaryOperator, side: &str) -> ParseError {
    ParseError::malformed(op, format!("'{}' is missing its {} operand", op, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::*;
    use pretty_assertions::assert_eq;
    use BinaryOperator::*;

    fn n(x: Int) -> Token {
        Token::Node(Node::number(x))
    }

    fn op(op: BinaryOperator) -> Token {
        Token::Operator(op)
    }

    #[test]
    fn test_bind_single_operator() {
        assert_eq!(
            resolve(vec![n(1), op(Add), n(2)]).unwrap(),
            vec![Node::binary(Node::number(1), Add, Node::number(2))]
        );
    }

    #[test]
    fn test_bind_by_adjacency() {
        assert_eq!(
            resolve(vec![n(2), op(Add), n(3), op(Mul), n(4)]).unwrap(),
            vec![Node::binary(
                Node::binary(Node::number(2), Add, Node::number(3)),
                Mul,
                Node::number(4)
            )]
        );
    }

    #[test]
    fn test_siblings_stay_in_order() {
        assert_eq!(
            resolve(vec![n(1), n(2), op(Sub), n(3), n(4)]).unwrap(),
            vec![
                Node::number(1),
                Node::binary(Node::number(2), Sub, Node::number(3)),
                Node::number(4),
            ]
        );
    }

    #[test]
    fn test_others_are_dropped() {
        assert_eq!(
            resolve(vec![Token::Other("(".to_owned()), n(1), Token::Other(")".to_owned())]).unwrap(),
            vec![Node::number(1)]
        );
    }

    #[test]
    fn test_missing_operands() {
        let missing = |tokens| matches!(resolve(tokens), Err(ParseError::Malformed { .. }));
        assert!(missing(vec![op(Add), n(1)]));
        assert!(missing(vec![n(1), op(Add)]));
        assert!(missing(vec![n(1), op(Add), op(Add), n(2)]));
        assert!(missing(vec![n(1), Token::Other("x".to_owned()), op(Add), n(2)]));
        assert!(missing(vec![n(1), op(Add), Token::Other("x".to_owned())]));
    }
}
