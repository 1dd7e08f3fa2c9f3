//! Diagnostic types for i18n call analysis
//!
//! Kinds are structured values; the host-facing string code is formatted
//! only at the reporting boundary (`Diagnostic::code`). Diagnostics are
//! append-only: once emitted they are never mutated.

use crate::shape::ArgRole;
use translint_core::Changeset;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - must be fixed
    Error,
    /// Warning - should be reviewed
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What was found, structured; role-carrying variants keep the argument
/// role as data instead of baking it into a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Bare `_()` call where `__()` was intended
    SingleUnderscoreFunction,
    /// `translate()` / `translate_with_gettext_context()` usage
    LowLevelTranslationFunction,
    MissingArgument(ArgRole),
    TooManyArguments,
    /// Multi-token or non-string argument
    NonLiteralArgument(ArgRole),
    InterpolatedVariable(ArgRole),
    TextDomainMismatch,
    MissingSingularPlaceholder,
    MismatchedPlaceholders,
    MixedOrderedPlaceholders(ArgRole),
    UnorderedPlaceholders(ArgRole),
    EmptyTranslatableString,
    MissingTranslatorsComment,
    TranslatorsCommentWrongStyle,
}

impl DiagnosticKind {
    /// Host-facing sniff code, compatible with the WordPress coding
    /// standard's identifiers.
    pub fn code(&self) -> String {
        match self {
            DiagnosticKind::SingleUnderscoreFunction => {
                "SingleUnderscoreGetTextFunction".to_string()
            }
            DiagnosticKind::LowLevelTranslationFunction => {
                "LowLevelTranslationFunction".to_string()
            }
            DiagnosticKind::MissingArgument(role) => format!("MissingArg{}", role.code_suffix()),
            DiagnosticKind::TooManyArguments => "TooManyFunctionArgs".to_string(),
            DiagnosticKind::NonLiteralArgument(role) => {
                format!("NonSingularStringLiteral{}", role.code_suffix())
            }
            DiagnosticKind::InterpolatedVariable(role) => {
                format!("InterpolatedVariable{}", role.code_suffix())
            }
            DiagnosticKind::TextDomainMismatch => "TextDomainMismatch".to_string(),
            DiagnosticKind::MissingSingularPlaceholder => {
                "MissingSingularPlaceholder".to_string()
            }
            DiagnosticKind::MismatchedPlaceholders => "MismatchedPlaceholders".to_string(),
            DiagnosticKind::MixedOrderedPlaceholders(role) => {
                format!("MixedOrderedPlaceholders{}", role.code_suffix())
            }
            DiagnosticKind::UnorderedPlaceholders(role) => {
                format!("UnorderedPlaceholders{}", role.code_suffix())
            }
            DiagnosticKind::EmptyTranslatableString => "NoEmptyStrings".to_string(),
            DiagnosticKind::MissingTranslatorsComment => "MissingTranslatorsComment".to_string(),
            DiagnosticKind::TranslatorsCommentWrongStyle => {
                "TranslatorsCommentWrongStyle".to_string()
            }
        }
    }
}

/// A single finding at a call site
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// What was found
    pub kind: DiagnosticKind,
    /// Severity level
    pub severity: Severity,
    /// Token index the finding anchors to
    pub position: usize,
    /// 1-based source line of the anchor token
    pub line: u32,
    /// Human-readable message
    pub message: String,
    /// Whether an automatic fix is available
    pub fixable: bool,
    /// The fix, when one is available
    pub fix: Option<Changeset>,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        severity: Severity,
        message: impl Into<String>,
        position: usize,
        line: u32,
    ) -> Self {
        Self {
            kind,
            severity,
            position,
            line,
            message: message.into(),
            fixable: false,
            fix: None,
        }
    }

    /// Create a new error diagnostic
    pub fn error(
        kind: DiagnosticKind,
        message: impl Into<String>,
        position: usize,
        line: u32,
    ) -> Self {
        Self::new(kind, Severity::Error, message, position, line)
    }

    /// Create a new warning diagnostic
    pub fn warning(
        kind: DiagnosticKind,
        message: impl Into<String>,
        position: usize,
        line: u32,
    ) -> Self {
        Self::new(kind, Severity::Warning, message, position, line)
    }

    /// Attach an automatic fix
    pub fn with_fix(mut self, fix: Changeset) -> Self {
        self.fixable = true;
        self.fix = Some(fix);
        self
    }

    /// Host-facing string code, formatted at the reporting boundary.
    pub fn code(&self) -> String {
        self.kind.code()
    }
}

/// Collection of diagnostics from analysis
#[derive(Debug, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Sort by source line, then token position
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.position.cmp(&b.position)));
    }
}
