//! Test fixture lexer
//!
//! Production token streams come from the tokenizer host; the tests need
//! realistic ones without it. This is a deliberately small lexer for the
//! PHP subset the tests exercise (calls, literals, variables, comments)
//! and nothing more. Like the host's tokenizer, it splits a multi-line
//! string literal into one token per line.

use translint_core::{Token, TokenKind, TokenStream};

pub(crate) fn lex(source: &str) -> TokenStream {
    TokenStream::new(lex_tokens(source)).expect("fixture source is balanced")
}

pub(crate) fn lex_tokens(source: &str) -> Vec<Token> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut line: u32 = 1;
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let start_line = line;

        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' => {
                while i < bytes.len() && matches!(bytes[i], b' ' | b'\t' | b'\n' | b'\r') {
                    if bytes[i] == b'\n' {
                        line += 1;
                    }
                    i += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Whitespace,
                    &source[start..i],
                    start_line,
                ));
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                tokens.push(Token::new(TokenKind::Comment, &source[start..i], start_line));
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let kind = if bytes.get(i + 2) == Some(&b'*') {
                    TokenKind::DocComment
                } else {
                    TokenKind::Comment
                };
                i += 2;
                while i < bytes.len() && !(bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/')) {
                    if bytes[i] == b'\n' {
                        line += 1;
                    }
                    i += 1;
                }
                i = (i + 2).min(bytes.len());
                tokens.push(Token::new(kind, &source[start..i], start_line));
            }
            quote @ (b'\'' | b'"') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\n' {
                        line += 1;
                        i += 1;
                    } else if bytes[i] == b'\\' && i + 1 < bytes.len() {
                        // Keep escape sequences raw.
                        if bytes[i + 1] == b'\n' {
                            line += 1;
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                i = (i + 1).min(bytes.len());
                let kind = if quote == b'\'' {
                    TokenKind::SingleQuotedString
                } else {
                    TokenKind::DoubleQuotedString
                };
                push_literal_pieces(&mut tokens, kind, &source[start..i], start_line);
            }
            b'$' if bytes
                .get(i + 1)
                .is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_') =>
            {
                i += 1;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Variable,
                    &source[start..i],
                    start_line,
                ));
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                tokens.push(Token::new(
                    TokenKind::Identifier,
                    &source[start..i],
                    start_line,
                ));
            }
            b if b.is_ascii_digit() => {
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                tokens.push(Token::new(TokenKind::Other, &source[start..i], start_line));
            }
            b',' => {
                i += 1;
                tokens.push(Token::new(TokenKind::Comma, ",", start_line));
            }
            b'(' => {
                i += 1;
                tokens.push(Token::new(TokenKind::OpenParen, "(", start_line));
            }
            b')' => {
                i += 1;
                tokens.push(Token::new(TokenKind::CloseParen, ")", start_line));
            }
            b'[' => {
                i += 1;
                tokens.push(Token::new(TokenKind::OpenBracket, "[", start_line));
            }
            b']' => {
                i += 1;
                tokens.push(Token::new(TokenKind::CloseBracket, "]", start_line));
            }
            _ => {
                let ch = source[i..].chars().next().expect("in-bounds char");
                i += ch.len_utf8();
                tokens.push(Token::new(TokenKind::Other, &source[start..i], start_line));
            }
        }
    }

    tokens
}

/// One token per source line, the way the host tokenizer hands over
/// multi-line literals; the newline stays with the leading piece.
fn push_literal_pieces(tokens: &mut Vec<Token>, kind: TokenKind, raw: &str, mut line: u32) {
    let mut rest = raw;
    while let Some(pos) = rest.find('\n') {
        let (piece, tail) = rest.split_at(pos + 1);
        tokens.push(Token::new(kind, piece, line));
        line += 1;
        rest = tail;
    }
    if !rest.is_empty() {
        tokens.push(Token::new(kind, rest, line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexes_simple_call() {
        let tokens = lex_tokens("__( 'Hi', 'dom' )");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::OpenParen,
                TokenKind::Whitespace,
                TokenKind::SingleQuotedString,
                TokenKind::Comma,
                TokenKind::Whitespace,
                TokenKind::SingleQuotedString,
                TokenKind::Whitespace,
                TokenKind::CloseParen,
            ]
        );
        assert_eq!(tokens[3].text, "'Hi'");
    }

    #[test]
    fn test_line_numbers() {
        let tokens = lex_tokens("// note\n__( 'a' )");
        assert_eq!(tokens[0].line, 1);
        let ident = tokens.iter().find(|t| t.kind == TokenKind::Identifier).unwrap();
        assert_eq!(ident.line, 2);
    }

    #[test]
    fn test_multiline_literal_split_per_line() {
        let tokens = lex_tokens("'one\ntwo'");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "'one\n");
        assert_eq!(tokens[1].text, "two'");
        assert_eq!(tokens[0].kind, TokenKind::SingleQuotedString);
        assert_eq!(tokens[1].kind, TokenKind::SingleQuotedString);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_escapes_kept_raw() {
        let tokens = lex_tokens(r#""a \$b \" c""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::DoubleQuotedString);
        assert_eq!(tokens[0].text, r#""a \$b \" c""#);
    }

    #[test]
    fn test_variables_and_comments() {
        let tokens = lex_tokens("$count /* c */ /** d */");
        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert_eq!(tokens[0].text, "$count");
        assert_eq!(tokens[2].kind, TokenKind::Comment);
        assert_eq!(tokens[4].kind, TokenKind::DocComment);
    }
}
