//! Token model and stream queries
//!
//! The tokenizer host owns lexing; this module only defines the shape the
//! analyzer consumes: an ordered, randomly-indexable list of immutable
//! tokens with resolved parenthesis/bracket pairing and the bounded
//! find-next/find-previous queries the checks are written against.

use thiserror::Error;

/// Role classifier of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A bare identifier (function name, constant, keyword)
    Identifier,
    /// A `$variable`
    Variable,
    /// A single-quoted string literal, raw text including quotes
    SingleQuotedString,
    /// A double-quoted string literal, raw text including quotes
    DoubleQuotedString,
    /// `,`
    Comma,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// Spaces, tabs, newlines
    Whitespace,
    /// `// ...` or `/* ... */`
    Comment,
    /// `/** ... */`
    DocComment,
    /// Anything else (operators, numbers, ...)
    Other,
}

impl TokenKind {
    /// Tokens that carry no meaning for argument structure.
    pub fn is_skippable(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Quoted string literal of either kind.
    pub fn is_string_literal(self) -> bool {
        matches!(
            self,
            TokenKind::SingleQuotedString | TokenKind::DoubleQuotedString
        )
    }

    fn closing_pair(self) -> Option<TokenKind> {
        match self {
            TokenKind::OpenParen => Some(TokenKind::CloseParen),
            TokenKind::OpenBracket => Some(TokenKind::CloseBracket),
            _ => None,
        }
    }

    fn closes_span(self) -> bool {
        matches!(self, TokenKind::CloseParen | TokenKind::CloseBracket)
    }
}

/// Kinds skipped when looking for meaningful tokens.
pub const SKIPPABLE_KINDS: &[TokenKind] = &[
    TokenKind::Whitespace,
    TokenKind::Comment,
    TokenKind::DocComment,
];

/// Comment kinds, in the order `find_previous` is usually called with.
pub const COMMENT_KINDS: &[TokenKind] = &[TokenKind::Comment, TokenKind::DocComment];

/// One immutable lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw text exactly as it appears in the source, quotes included.
    pub text: String,
    /// 1-based source line of the token's first character.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

/// Errors raised when a token list violates the tokenizer contract.
#[derive(Debug, Error)]
pub enum TokenStreamError {
    #[error("Opening token at index {0} has no matching closer")]
    UnmatchedOpener(usize),

    #[error("Closing token at index {0} has no matching opener")]
    UnmatchedCloser(usize),

    #[error("Closing token at index {index} does not match opener at index {opener}")]
    MismatchedPair { opener: usize, index: usize },
}

/// An ordered token list with resolved span pairing.
///
/// Tokens are immutable once the stream is built; checks reference them by
/// index only.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    closers: Vec<Option<usize>>,
}

impl TokenStream {
    /// Build a stream from host tokens, resolving the matching closer of
    /// every parenthesis/bracket opener.
    pub fn new(tokens: Vec<Token>) -> Result<Self, TokenStreamError> {
        let mut closers = vec![None; tokens.len()];
        let mut stack: Vec<(usize, TokenKind)> = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if let Some(expected) = token.kind.closing_pair() {
                stack.push((index, expected));
            } else if token.kind.closes_span() {
                match stack.pop() {
                    Some((opener, expected)) if expected == token.kind => {
                        closers[opener] = Some(index);
                    }
                    Some((opener, _)) => {
                        return Err(TokenStreamError::MismatchedPair { opener, index });
                    }
                    None => return Err(TokenStreamError::UnmatchedCloser(index)),
                }
            }
        }

        if let Some((opener, _)) = stack.pop() {
            return Err(TokenStreamError::UnmatchedOpener(opener));
        }

        Ok(Self { tokens, closers })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Resolved closer index of the opener at `index`.
    pub fn closer_of(&self, index: usize) -> Option<usize> {
        self.closers.get(index).copied().flatten()
    }

    /// Find the next token at or after `from` whose kind is in `kinds`
    /// (or, with `exclude`, is *not* in `kinds`), bounded by `until`
    /// (exclusive) when given.
    pub fn find_next(
        &self,
        kinds: &[TokenKind],
        from: usize,
        until: Option<usize>,
        exclude: bool,
    ) -> Option<usize> {
        let end = until.unwrap_or(self.tokens.len()).min(self.tokens.len());
        (from..end).find(|&i| kinds.contains(&self.tokens[i].kind) != exclude)
    }

    /// Find the closest token at or before `from` whose kind is in `kinds`
    /// (or, with `exclude`, is *not* in `kinds`), bounded by `until`
    /// (inclusive) when given.
    pub fn find_previous(
        &self,
        kinds: &[TokenKind],
        from: usize,
        until: Option<usize>,
        exclude: bool,
    ) -> Option<usize> {
        if self.tokens.is_empty() {
            return None;
        }
        let start = from.min(self.tokens.len() - 1);
        let lower = until.unwrap_or(0);
        (lower..=start)
            .rev()
            .find(|&i| kinds.contains(&self.tokens[i].kind) != exclude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, 1)
    }

    fn call_tokens() -> Vec<Token> {
        vec![
            tok(TokenKind::Identifier, "__"),
            tok(TokenKind::OpenParen, "("),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::SingleQuotedString, "'Hi'"),
            tok(TokenKind::Comma, ","),
            tok(TokenKind::SingleQuotedString, "'dom'"),
            tok(TokenKind::CloseParen, ")"),
        ]
    }

    #[test]
    fn test_resolves_paren_closer() {
        let stream = TokenStream::new(call_tokens()).unwrap();
        assert_eq!(stream.closer_of(1), Some(6));
        assert_eq!(stream.closer_of(0), None);
    }

    #[test]
    fn test_nested_spans() {
        let stream = TokenStream::new(vec![
            tok(TokenKind::OpenParen, "("),
            tok(TokenKind::OpenBracket, "["),
            tok(TokenKind::Other, "1"),
            tok(TokenKind::CloseBracket, "]"),
            tok(TokenKind::CloseParen, ")"),
        ])
        .unwrap();
        assert_eq!(stream.closer_of(0), Some(4));
        assert_eq!(stream.closer_of(1), Some(3));
    }

    #[test]
    fn test_unmatched_opener_rejected() {
        let err = TokenStream::new(vec![tok(TokenKind::OpenParen, "(")]).unwrap_err();
        assert!(matches!(err, TokenStreamError::UnmatchedOpener(0)));
    }

    #[test]
    fn test_unmatched_closer_rejected() {
        let err = TokenStream::new(vec![tok(TokenKind::CloseParen, ")")]).unwrap_err();
        assert!(matches!(err, TokenStreamError::UnmatchedCloser(0)));
    }

    #[test]
    fn test_mismatched_pair_rejected() {
        let err = TokenStream::new(vec![
            tok(TokenKind::OpenParen, "("),
            tok(TokenKind::CloseBracket, "]"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            TokenStreamError::MismatchedPair { opener: 0, index: 1 }
        ));
    }

    #[test]
    fn test_find_next_skips_whitespace() {
        let stream = TokenStream::new(call_tokens()).unwrap();
        // First non-skippable token after the open paren is the literal.
        assert_eq!(stream.find_next(SKIPPABLE_KINDS, 2, None, true), Some(3));
        assert_eq!(
            stream.find_next(&[TokenKind::Comma], 0, None, false),
            Some(4)
        );
    }

    #[test]
    fn test_find_next_respects_bound() {
        let stream = TokenStream::new(call_tokens()).unwrap();
        assert_eq!(stream.find_next(&[TokenKind::Comma], 0, Some(4), false), None);
    }

    #[test]
    fn test_find_previous() {
        let stream = TokenStream::new(call_tokens()).unwrap();
        assert_eq!(
            stream.find_previous(&[TokenKind::SingleQuotedString], 6, None, false),
            Some(5)
        );
        assert_eq!(
            stream.find_previous(&[TokenKind::SingleQuotedString], 6, Some(6), false),
            None
        );
    }
}
