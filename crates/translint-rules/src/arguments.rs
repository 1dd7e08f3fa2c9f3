//! Logical-argument reconstruction
//!
//! Partitions the tokens between a call's parentheses into logical
//! arguments at top-level commas. Nested parenthesis/bracket spans are
//! copied verbatim (their internal commas are not separators), directly
//! consecutive string-literal tokens of the same kind are merged into one
//! logical token (multi-line literals), and whitespace/comment tokens are
//! dropped at the top level. Source tokens are never mutated: an argument
//! is a view of indices plus, for merged literals, owned concatenated
//! text.

use std::borrow::Cow;
use translint_core::{TokenKind, TokenStream};

/// One logical token of an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgToken<'a> {
    /// Index of the (first) source token this view covers
    pub index: usize,
    pub kind: TokenKind,
    /// Raw text; owned only when consecutive literals were merged
    pub text: Cow<'a, str>,
}

/// An ordered sequence of logical tokens between top-level commas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogicalArgument<'a> {
    pub tokens: Vec<ArgToken<'a>>,
}

impl<'a> LogicalArgument<'a> {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the argument's first source token.
    pub fn first_index(&self) -> Option<usize> {
        self.tokens.first().map(|t| t.index)
    }

    /// The argument's only token, when it has exactly one.
    pub fn single_token(&self) -> Option<&ArgToken<'a>> {
        match self.tokens.as_slice() {
            [token] => Some(token),
            _ => None,
        }
    }

    /// Raw text of all logical tokens, concatenated.
    pub fn combined_text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_ref()).collect()
    }
}

/// Split the argument list of the call whose opening parenthesis sits at
/// `open_paren` into logical arguments.
///
/// An empty call yields no arguments; a call containing only commas
/// yields one empty argument per slot the commas delimit.
pub fn split_arguments(stream: &TokenStream, open_paren: usize) -> Vec<LogicalArgument<'_>> {
    let Some(closer) = stream.closer_of(open_paren) else {
        return Vec::new();
    };

    let tokens = stream.tokens();
    let mut arguments = Vec::new();
    let mut current = LogicalArgument::default();
    let mut saw_comma = false;

    let mut i = open_paren + 1;
    while i < closer {
        let token = &tokens[i];

        if token.kind.is_skippable() {
            i += 1;
            continue;
        }

        if token.kind == TokenKind::Comma {
            arguments.push(std::mem::take(&mut current));
            saw_comma = true;
            i += 1;
            continue;
        }

        if token.kind.is_string_literal() {
            // Merge directly consecutive literals of the same kind: the
            // tokenizer splits multi-line strings into one token per line.
            let mut end = i;
            while end + 1 < closer && tokens[end + 1].kind == token.kind {
                end += 1;
            }
            if end > i {
                let merged: String = tokens[i..=end].iter().map(|t| t.text.as_str()).collect();
                current.tokens.push(ArgToken {
                    index: i,
                    kind: token.kind,
                    text: Cow::Owned(merged),
                });
                i = end + 1;
                continue;
            }
        }

        current.tokens.push(ArgToken {
            index: i,
            kind: token.kind,
            text: Cow::Borrowed(token.text.as_str()),
        });

        // A nested span travels whole, internal commas and all.
        if let Some(span_closer) = stream.closer_of(i) {
            for (j, nested) in tokens[i + 1..=span_closer].iter().enumerate() {
                current.tokens.push(ArgToken {
                    index: i + 1 + j,
                    kind: nested.kind,
                    text: Cow::Borrowed(nested.text.as_str()),
                });
            }
            i = span_closer + 1;
            continue;
        }

        i += 1;
    }

    if !current.is_empty() || saw_comma {
        arguments.push(current);
    }

    arguments
}
