//! Translation-call validation
//!
//! The call-site driver: reconstructs logical arguments, binds them to the
//! roles of the function family's template, validates each binding, cross
//! checks singular/plural placeholder sets, and produces a replacement
//! changeset for literals whose multiple placeholders lack explicit
//! positions. Every problem is a diagnostic; analysis always continues
//! with the remaining arguments.

use std::collections::VecDeque;
use std::sync::OnceLock;

use regex::Regex;
use translint_core::{Changeset, TokenKind, TokenStream};

use crate::arguments::{split_arguments, LogicalArgument};
use crate::comments;
use crate::config::I18nConfig;
use crate::diagnostic::{Diagnostic, DiagnosticKind, Severity};
use crate::placeholders::{placeholders, strip_placeholders, PlaceholderSet};
use crate::shape::{family_of, is_low_level, ArgRole, ArgSlot};

/// A role bound to one logical argument (possibly empty) with its
/// diagnostic anchor: the argument's first token, or the call's opening
/// parenthesis when the argument is absent.
#[derive(Debug)]
pub(crate) struct RoleBinding<'a> {
    pub(crate) role: ArgRole,
    pub(crate) argument: LogicalArgument<'a>,
    pub(crate) anchor: usize,
}

/// Analyze the potential translation call at token index `at`.
///
/// Argument-level findings are errors; see [`check_call_with_severity`]
/// for the caller-supplied policy.
pub fn check_call(stream: &TokenStream, config: &I18nConfig, at: usize) -> Vec<Diagnostic> {
    check_call_with_severity(stream, config, at, Severity::Error)
}

/// Analyze the potential translation call at token index `at`, reporting
/// argument-level findings with the given severity. Structural findings
/// keep their fixed severities regardless of policy.
pub fn check_call_with_severity(
    stream: &TokenStream,
    config: &I18nConfig,
    at: usize,
    severity: Severity,
) -> Vec<Diagnostic> {
    CallCheck {
        stream,
        config,
        severity,
        diagnostics: Vec::new(),
    }
    .run(at)
}

struct CallCheck<'a> {
    stream: &'a TokenStream,
    config: &'a I18nConfig,
    /// Caller policy for argument-level findings
    severity: Severity,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> CallCheck<'a> {
    fn run(mut self, at: usize) -> Vec<Diagnostic> {
        let stream = self.stream;
        let Some(token) = stream.get(at) else {
            return self.diagnostics;
        };
        if token.kind != TokenKind::Identifier {
            return self.diagnostics;
        }

        if token.text == "_" {
            self.error(
                DiagnosticKind::SingleUnderscoreFunction,
                "Found single-underscore \"_()\" function when double-underscore expected.",
                at,
            );
        }

        let Some(family) = family_of(&token.text) else {
            return self.diagnostics;
        };
        let function_name = token.text.as_str();

        if is_low_level(function_name) {
            self.warning(
                DiagnosticKind::LowLevelTranslationFunction,
                format!(
                    "Use of the \"{}()\" function is reserved for low-level API usage.",
                    function_name
                ),
                at,
            );
        }

        // Not a call unless an opening parenthesis follows the name.
        let open_paren = match stream.find_next(&[TokenKind::Whitespace], at + 1, None, true) {
            Some(index) if stream.tokens()[index].kind == TokenKind::OpenParen => index,
            _ => return self.diagnostics,
        };

        let mut remaining: VecDeque<LogicalArgument<'a>> =
            split_arguments(stream, open_paren).into();

        let mut bindings = Vec::new();
        for slot in family.template() {
            match slot {
                ArgSlot::Skip => {
                    remaining.pop_front();
                }
                ArgSlot::Role(role) => {
                    let argument = remaining.pop_front().unwrap_or_default();
                    let anchor = argument.first_index().unwrap_or(open_paren);
                    bindings.push(RoleBinding {
                        role: *role,
                        argument,
                        anchor,
                    });
                }
            }
        }

        if !remaining.is_empty() {
            self.error(
                DiagnosticKind::TooManyArguments,
                format!("Too many arguments for function \"{}\".", function_name),
                open_paren,
            );
        }

        for binding in &bindings {
            self.check_argument(binding);
        }

        // For the _n*() forms, compare the singular and plural strings.
        if family.has_plural_forms() {
            self.compare_single_and_plural(&bindings[0], &bindings[1], at);
        }

        if self.config.check_translator_comments {
            comments::check_translator_comment(stream, at, &bindings, &mut self.diagnostics);
        }

        self.diagnostics
    }

    /// Validate one bound argument: present, a single string literal,
    /// interpolation-free, and for the domain role a configured domain.
    fn check_argument(&mut self, binding: &RoleBinding<'a>) {
        let role = binding.role;
        let anchor = binding.anchor;

        if binding.argument.is_empty() {
            // A missing domain is acceptable until domains are configured.
            if role != ArgRole::Domain || self.config.domain_checking_enabled() {
                self.report(
                    DiagnosticKind::MissingArgument(role),
                    format!("Missing ${} arg.", role),
                    anchor,
                );
            }
            return;
        }

        if binding.argument.tokens.len() > 1 {
            self.report(
                DiagnosticKind::NonLiteralArgument(role),
                format!(
                    "The ${} arg must be a single string literal, not \"{}\".",
                    role,
                    binding.argument.combined_text()
                ),
                anchor,
            );
            return;
        }

        let token = &binding.argument.tokens[0];
        if !token.kind.is_string_literal() {
            self.report(
                DiagnosticKind::NonLiteralArgument(role),
                format!(
                    "The ${} arg should be a single string literal, not \"{}\".",
                    role, token.text
                ),
                anchor,
            );
            return;
        }

        if token.kind == TokenKind::DoubleQuotedString {
            let variables = interpolated_variables(&token.text);
            if !variables.is_empty() {
                for name in &variables {
                    self.report(
                        DiagnosticKind::InterpolatedVariable(role),
                        format!(
                            "The ${} arg must not contain interpolated variables. Found \"${}\".",
                            role, name
                        ),
                        anchor,
                    );
                }
                // Interpolated content is unusable for the remaining checks.
                return;
            }
        }

        if role == ArgRole::Domain && self.config.domain_checking_enabled() {
            let value = strip_quotes(&token.text);
            if !self.config.text_domains.iter().any(|domain| domain == value) {
                self.report(
                    DiagnosticKind::TextDomainMismatch,
                    format!(
                        "Mismatch text domain. Expected '{}' but got {}.",
                        self.config.text_domains.join("' or '"),
                        token.text
                    ),
                    anchor,
                );
                return;
            }
        }

        if matches!(role, ArgRole::Text | ArgRole::Single | ArgRole::Plural) {
            self.check_text(role, token.text.as_ref(), anchor);
        }
    }

    /// Placeholder checks on a translatable literal's raw content, and the
    /// rewrite for multiple unordered placeholders.
    fn check_text(&mut self, role: ArgRole, content: &str, position: usize) {
        let unordered = placeholders(content, PlaceholderSet::UnorderedOnly);
        let all = placeholders(content, PlaceholderSet::All);

        if !unordered.is_empty() && unordered.len() != all.len() && all.len() > 1 {
            self.error(
                DiagnosticKind::MixedOrderedPlaceholders(role),
                format!(
                    "Multiple placeholders should be ordered. Mix of ordered and non-ordered placeholders found. Found: {}.",
                    all.join(", ")
                ),
                position,
            );
        } else if unordered.len() >= 2 {
            // `$` starts interpolation inside double quotes, so the inserted
            // position separator has to stay escaped there.
            let separator = if content.starts_with('"') { "\\$" } else { "$" };

            let mut suggestions = Vec::with_capacity(unordered.len());
            let mut fixed = content.to_string();
            let mut cursor = 0;
            for (i, placeholder) in unordered.iter().enumerate() {
                let ordered = format!("%{}{}{}", i + 1, separator, &placeholder[1..]);
                if let Some(offset) = fixed[cursor..].find(placeholder.as_str()) {
                    let start = cursor + offset;
                    fixed.replace_range(start..start + placeholder.len(), &ordered);
                    cursor = start + ordered.len();
                }
                suggestions.push(ordered);
            }

            let mut fix = Changeset::new();
            fix.replace(position, content, fixed);

            let diagnostic = Diagnostic::new(
                DiagnosticKind::UnorderedPlaceholders(role),
                self.severity,
                format!(
                    "Multiple placeholders should be ordered. Expected '{}', but got {}.",
                    suggestions.join(", "),
                    unordered.join(", ")
                ),
                position,
                self.line_of(position),
            )
            .with_fix(fix);
            self.diagnostics.push(diagnostic);
        }

        // Strip quotes and placeholders; what remains must say something.
        let stripped = strip_placeholders(strip_quotes(content));
        if stripped.is_empty() {
            self.error(
                DiagnosticKind::EmptyTranslatableString,
                "Strings should have translatable content",
                position,
            );
        }
    }

    /// English conflates "singular" with "only one"; some target languages
    /// use the singular form for other counts too, so its placeholders must
    /// cover the plural form's.
    fn compare_single_and_plural(
        &mut self,
        single: &RoleBinding<'a>,
        plural: &RoleBinding<'a>,
        call_at: usize,
    ) {
        let (Some(single_token), Some(plural_token)) = (
            single.argument.single_token(),
            plural.argument.single_token(),
        ) else {
            // Shape problems were already reported for these arguments.
            return;
        };

        let single_placeholders = placeholders(&single_token.text, PlaceholderSet::All);
        let plural_placeholders = placeholders(&plural_token.text, PlaceholderSet::All);

        if single_placeholders.len() < plural_placeholders.len() {
            self.error(
                DiagnosticKind::MissingSingularPlaceholder,
                "Missing singular placeholder, needed for some languages. See https://codex.wordpress.org/I18n_for_WordPress_Developers#Plurals",
                single.anchor,
            );
        }

        // Reordering is fine, but mismatched placeholders is probably wrong.
        let mut single_sorted = single_placeholders;
        let mut plural_sorted = plural_placeholders;
        single_sorted.sort();
        plural_sorted.sort();

        if single_sorted != plural_sorted {
            self.warning(
                DiagnosticKind::MismatchedPlaceholders,
                "Mismatched placeholders is probably an error",
                call_at,
            );
        }
    }

    fn line_of(&self, position: usize) -> u32 {
        self.stream.get(position).map(|t| t.line).unwrap_or(0)
    }

    fn error(&mut self, kind: DiagnosticKind, message: impl Into<String>, position: usize) {
        let line = self.line_of(position);
        self.diagnostics
            .push(Diagnostic::error(kind, message, position, line));
    }

    fn warning(&mut self, kind: DiagnosticKind, message: impl Into<String>, position: usize) {
        let line = self.line_of(position);
        self.diagnostics
            .push(Diagnostic::warning(kind, message, position, line));
    }

    /// Emit with the caller-supplied severity policy.
    fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>, position: usize) {
        let line = self.line_of(position);
        self.diagnostics
            .push(Diagnostic::new(kind, self.severity, message, position, line));
    }
}

/// Strip one matching pair of surrounding quote characters.
pub(crate) fn strip_quotes(content: &str) -> &str {
    for quote in ['\'', '"'] {
        if content.len() >= 2 && content.starts_with(quote) && content.ends_with(quote) {
            return &content[1..content.len() - 1];
        }
    }
    content
}

/// Variable references interpolated into double-quoted content: `$name` or
/// `${name}`, ignoring backslash-escaped dollars.
fn interpolated_variables(content: &str) -> Vec<String> {
    static INTERPOLATION_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = INTERPOLATION_REGEX.get_or_init(|| {
        Regex::new(r"(\\*)\$\{?([a-zA-Z_][a-zA-Z0-9_]*)\}?").unwrap()
    });

    regex
        .captures_iter(content)
        .filter(|caps| caps.get(1).map_or(0, |m| m.as_str().len()) % 2 == 0)
        .map(|caps| caps[2].to_string())
        .collect()
}
