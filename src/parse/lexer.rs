use super::ast::{Dice, Method, Node};
use super::error::ParseError;
use crate::common::*;
use logos::Logos;
use logos_iter::{LogosIter, PeekableLexer};

type Lexer<'a> = PeekableLexer<'a, logos::Lexer<'a, TokenKind>, TokenKind>;

fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

/// Classification of a single whitespace-delimited word.
#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TokenKind {
    #[regex(r"fn#[0-9]+")]
    Placeholder,

    #[regex(r"[+-]?[0-9]+")]
    Integer,

    // Any die size is accepted here so that a bad one can be reported.
    #[regex(r"[0-9]+d[A-Za-z0-9]+")]
    Dice,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[regex(r"\$[A-Za-z0-9_]+")]
    Variable,

    #[error]
    Error,
}

/// A classified word. Operators stay unbound until operand resolution.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Node(Node),
    Operator(BinaryOperator),
    Other(String),
}

/// Functions hoisted out of the source, addressed by their `fn#<index>`
/// placeholder.
#[derive(Debug, Default)]
pub(crate) struct MethodTable {
    methods: Vec<Option<Method>>,
}

impl MethodTable {
    pub fn register(&mut self, method: Method) -> String {
        self.methods.push(Some(method));
        format!("fn#{}", self.methods.len() - 1)
    }

    /// Each placeholder resolves exactly once.
    fn take(&mut self, index: usize) -> Option<Method> {
        self.methods.get_mut(index)?.take()
    }
}

/// Splits hoisted source on whitespace and classifies every word.
pub(crate) fn tokenize(source: &str, methods: &mut MethodTable) -> Result<Vec<Token>, ParseError> {
    source
        .split_whitespace()
        .map(|word| word.strip_suffix(',').unwrap_or(word))
        .filter(|word| !word.is_empty())
        .map(|word| classify(word, methods))
        .collect()
}

fn classify(word: &str, methods: &mut MethodTable) -> Result<Token, ParseError> {
    let mut lex = lexer(word);
    let kind = lex.next();
    let whole = lex.span() == (0..word.len());
    let kind = match kind {
        Some(kind) if whole && lex.peek().is_none() => kind,
        _ => return Ok(Token::Other(word.to_owned())),
    };

    let token = match kind {
        TokenKind::Placeholder => {
            let method = word[3..]
                .parse()
                .ok()
                .and_then(|index| methods.take(index))
                .ok_or_else(|| ParseError::malformed(word, "unknown function placeholder"))?;
            Token::Node(Node::Method(method))
        }
        TokenKind::Integer => match word.parse() {
            Ok(value) => Token::Node(Node::number(value)),
            Err(_) => return Err(ParseError::malformed(word, "integer out of range")),
        },
        TokenKind::Dice => Token::Node(Node::Roll(parse_dice(word)?)),
        TokenKind::Plus => Token::Operator(BinaryOperator::Add),
        TokenKind::Minus => Token::Operator(BinaryOperator::Sub),
        TokenKind::Star => Token::Operator(BinaryOperator::Mul),
        TokenKind::Slash => Token::Operator(BinaryOperator::Div),
        TokenKind::Variable => Token::Node(Node::variable(&word[1..])),
        TokenKind::Error => Token::Other(word.to_owned()),
    };
    Ok(token)
}

// The lexer has already verified the `<digits>d<alphanumerics>` shape.
fn parse_dice(word: &str) -> Result<Dice, ParseError> {
    let (count, size) = word
        .split_once('d')
        .ok_or_else(|| ParseError::malformed(word, "expected dice"))?;
    let count = count
        .parse()
        .map_err(|_| ParseError::malformed(word, "too many dice"))?;
    let size = size.parse().map_err(|_| ParseError::InvalidDieSize {
        token: word.to_owned(),
        size: size.to_owned(),
    })?;
    Ok(Dice::new(count, size))
}
