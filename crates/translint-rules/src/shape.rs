//! Call-shape templates for the translation-function families
//!
//! Each family carries its ordered argument-role template as data; the
//! checker walks the template with one generic routine instead of
//! per-family branches. `Skip` slots consume an argument without binding
//! it (the count argument of the `_n()`-style forms).

/// Role a logical argument plays inside a translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgRole {
    Text,
    Single,
    Plural,
    Context,
    Domain,
}

impl ArgRole {
    /// Lower-case name as it appears in messages (`$text`, `$domain`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            ArgRole::Text => "text",
            ArgRole::Single => "single",
            ArgRole::Plural => "plural",
            ArgRole::Context => "context",
            ArgRole::Domain => "domain",
        }
    }

    /// Capitalized form used in diagnostic codes (`MissingArgDomain`).
    pub fn code_suffix(self) -> &'static str {
        match self {
            ArgRole::Text => "Text",
            ArgRole::Single => "Single",
            ArgRole::Plural => "Plural",
            ArgRole::Context => "Context",
            ArgRole::Domain => "Domain",
        }
    }
}

impl std::fmt::Display for ArgRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot of a call-shape template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgSlot {
    /// Bind the next logical argument to this role
    Role(ArgRole),
    /// Consume and discard the next logical argument
    Skip,
}

/// The closed set of translation-call families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionFamily {
    Simple,
    Context,
    Number,
    NumberContext,
    NoopNumber,
    NoopNumberContext,
}

impl FunctionFamily {
    /// Ordered argument template of this family.
    pub fn template(self) -> &'static [ArgSlot] {
        use ArgRole::*;
        use ArgSlot::*;
        match self {
            FunctionFamily::Simple => &[Role(Text), Role(Domain)],
            FunctionFamily::Context => &[Role(Text), Role(Context), Role(Domain)],
            FunctionFamily::Number => &[Role(Single), Role(Plural), Skip, Role(Domain)],
            FunctionFamily::NumberContext => {
                &[Role(Single), Role(Plural), Skip, Role(Context), Role(Domain)]
            }
            FunctionFamily::NoopNumber => &[Role(Single), Role(Plural), Role(Domain)],
            FunctionFamily::NoopNumberContext => {
                &[Role(Single), Role(Plural), Role(Context), Role(Domain)]
            }
        }
    }

    /// Families that carry singular and plural forms.
    pub fn has_plural_forms(self) -> bool {
        matches!(
            self,
            FunctionFamily::Number
                | FunctionFamily::NumberContext
                | FunctionFamily::NoopNumber
                | FunctionFamily::NoopNumberContext
        )
    }
}

/// The i18n functions in use in WordPress, function name to family.
pub const I18N_FUNCTIONS: &[(&str, FunctionFamily)] = &[
    ("translate", FunctionFamily::Simple),
    ("__", FunctionFamily::Simple),
    ("esc_attr__", FunctionFamily::Simple),
    ("esc_html__", FunctionFamily::Simple),
    ("_e", FunctionFamily::Simple),
    ("esc_attr_e", FunctionFamily::Simple),
    ("esc_html_e", FunctionFamily::Simple),
    ("translate_with_gettext_context", FunctionFamily::Context),
    ("_x", FunctionFamily::Context),
    ("_ex", FunctionFamily::Context),
    ("esc_attr_x", FunctionFamily::Context),
    ("esc_html_x", FunctionFamily::Context),
    ("_n", FunctionFamily::Number),
    ("_nx", FunctionFamily::NumberContext),
    ("_n_noop", FunctionFamily::NoopNumber),
    ("_nx_noop", FunctionFamily::NoopNumberContext),
];

/// Look up the family of a translation function, if it is one.
pub fn family_of(name: &str) -> Option<FunctionFamily> {
    I18N_FUNCTIONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, family)| *family)
}

/// Functions reserved for low-level API usage.
pub fn is_low_level(name: &str) -> bool {
    name == "translate" || name == "translate_with_gettext_context"
}
