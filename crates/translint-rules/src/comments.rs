//! Translators-comment verification
//!
//! A gettext call whose text contains a placeholder needs a
//! `/* translators: ... */` comment directly above it so the `.pot`
//! tooling can explain the placeholders to translators. Docblock-style
//! translators comments are flagged separately: the extraction tools do
//! not pick them up.

use std::sync::OnceLock;

use regex::Regex;
use translint_core::token::COMMENT_KINDS;
use translint_core::{TokenKind, TokenStream};

use crate::checker::RoleBinding;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::placeholders::{placeholders, PlaceholderSet};
use crate::shape::ArgRole;

const MISSING_COMMENT: &str = "A gettext call containing placeholders was found, but was not accompanied by a \"translators:\" comment on the line above to clarify the meaning of the placeholders.";

const WRONG_STYLE: &str = "A \"translators:\" comment must be a \"/* */\" style comment. Docblock comments will not be picked up by the tools to generate a \".pot\" file.";

/// Check for a translators comment when any text-bearing argument of the
/// call at `call_at` contains a placeholder.
pub(crate) fn check_translator_comment(
    stream: &TokenStream,
    call_at: usize,
    bindings: &[RoleBinding<'_>],
    diagnostics: &mut Vec<Diagnostic>,
) {
    let call_line = match stream.get(call_at) {
        Some(token) => token.line,
        None => return,
    };

    for binding in bindings {
        if !matches!(
            binding.role,
            ArgRole::Text | ArgRole::Single | ArgRole::Plural
        ) {
            continue;
        }

        for arg_token in &binding.argument.tokens {
            if arg_token.text.is_empty() {
                continue;
            }
            if placeholders(&arg_token.text, PlaceholderSet::All).is_empty() {
                continue;
            }

            // Found a placeholder; a comment must sit directly above.
            if let Some(comment_index) = previous_comment(stream, call_at) {
                let comment = &stream.tokens()[comment_index];
                if correctly_placed(stream, comment_index, call_at, call_line) {
                    match comment.kind {
                        TokenKind::Comment => {
                            if is_translators_comment(&comment.text) {
                                return;
                            }
                        }
                        TokenKind::DocComment => {
                            if is_translators_comment(&comment.text) {
                                diagnostics.push(Diagnostic::warning(
                                    DiagnosticKind::TranslatorsCommentWrongStyle,
                                    WRONG_STYLE,
                                    call_at,
                                    call_line,
                                ));
                                return;
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Placeholders but no translators comment.
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::MissingTranslatorsComment,
                MISSING_COMMENT,
                call_at,
                call_line,
            ));
            return;
        }
    }
}

fn previous_comment(stream: &TokenStream, call_at: usize) -> Option<usize> {
    if call_at == 0 {
        return None;
    }
    stream.find_previous(COMMENT_KINDS, call_at - 1, None, false)
}

/// The comment counts only when it sits on the line above the call, or
/// when nothing but whitespace separates the two.
fn correctly_placed(
    stream: &TokenStream,
    comment_index: usize,
    call_at: usize,
    call_line: u32,
) -> bool {
    let comment = &stream.tokens()[comment_index];
    if comment.line + 1 == call_line {
        return true;
    }
    match stream.find_next(
        &[TokenKind::Whitespace],
        comment_index + 1,
        Some(call_at),
        true,
    ) {
        None => true,
        Some(next) => stream.tokens()[next].line == call_line,
    }
}

/// A (trimmed) comment that starts with 'translators:' after an optional
/// comment opener.
fn is_translators_comment(content: &str) -> bool {
    static TRANSLATORS_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = TRANSLATORS_REGEX
        .get_or_init(|| Regex::new(r"(?i)^(?:(?://|/\*{1,2}) )?translators:").unwrap());
    regex.is_match(content.trim())
}
