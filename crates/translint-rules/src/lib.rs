//! translint-rules: i18n call-shape checks
//!
//! Validates WordPress-style translation calls (`__()`, `_x()`, `_n()`,
//! ...) against their argument-role templates, working on the token
//! stream a tokenizer host supplies:
//!
//! - logical-argument reconstruction at top-level commas
//! - single-string-literal and interpolation checks per argument role
//! - text-domain verification against a configured domain set
//! - singular/plural placeholder consistency for the counted forms
//! - ordered-placeholder enforcement with an automatic rewrite
//! - translators-comment presence for placeholder-bearing strings
//!
//! # Example
//!
//! ```no_run
//! use translint_core::TokenStream;
//! use translint_rules::{check_stream, I18nConfig};
//!
//! let config = I18nConfig::with_text_domains(["my-plugin"]);
//! let stream = TokenStream::new(host_tokens()).unwrap();
//! let diagnostics = check_stream(&stream, &config);
//! for diagnostic in diagnostics.diagnostics() {
//!     println!("{}: {} [{}]", diagnostic.severity, diagnostic.message, diagnostic.code());
//! }
//! # fn host_tokens() -> Vec<translint_core::Token> { Vec::new() }
//! ```

pub mod arguments;
pub mod checker;
mod comments;
pub mod config;
pub mod diagnostic;
pub mod placeholders;
pub mod shape;

#[cfg(test)]
pub(crate) mod fixture;

pub use checker::{check_call, check_call_with_severity};
pub use config::{ConfigError, I18nConfig};
pub use diagnostic::{Diagnostic, DiagnosticCollection, DiagnosticKind, Severity};
pub use shape::{family_of, ArgRole, FunctionFamily};

use rayon::prelude::*;
use translint_core::{TokenKind, TokenStream};

/// Analyze every identifier token of a stream as a potential translation
/// call. The host walker normally drives call sites one by one; this is
/// the whole-stream convenience on top of [`check_call`].
pub fn check_stream(stream: &TokenStream, config: &I18nConfig) -> DiagnosticCollection {
    let mut collection = DiagnosticCollection::new();
    for index in 0..stream.len() {
        if stream.tokens()[index].kind == TokenKind::Identifier {
            collection.extend(check_call(stream, config, index));
        }
    }
    collection
}

/// Analyze independent streams in parallel, one worker per stream. Safe
/// because analyses share nothing but the read-only configuration.
pub fn check_streams(
    streams: &[TokenStream],
    config: &I18nConfig,
) -> Vec<DiagnosticCollection> {
    streams
        .par_iter()
        .map(|stream| check_stream(stream, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::lex;

    #[test]
    fn test_check_stream_visits_every_call_site() {
        let mut config = I18nConfig::with_text_domains(["my-plugin"]);
        config.check_translator_comments = false;

        let stream = lex("__( 'a', 'bad' ) ; _e( 'b', 'worse' )");
        let collection = check_stream(&stream, &config);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.error_count(), 2);
    }

    #[test]
    fn test_nested_call_site_checked_independently() {
        let mut config = I18nConfig::with_text_domains(["my-plugin"]);
        config.check_translator_comments = false;

        // The outer argument is not a literal, and the inner call has a
        // bad domain: both surface.
        let stream = lex("__( __( 'x', 'bad' ), 'my-plugin' )");
        let collection = check_stream(&stream, &config);
        let codes: Vec<_> = collection.diagnostics().iter().map(|d| d.code()).collect();
        assert!(codes.contains(&"NonSingularStringLiteralText".to_string()));
        assert!(codes.contains(&"TextDomainMismatch".to_string()));
    }

    #[test]
    fn test_check_streams_parallel() {
        let mut config = I18nConfig::with_text_domains(["my-plugin"]);
        config.check_translator_comments = false;

        let streams = vec![
            lex("__( 'a', 'my-plugin' )"),
            lex("__( 'b', 'oops' )"),
            lex("__( 'c' )"),
        ];
        let results = check_streams(&streams, &config);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_empty());
        assert_eq!(results[1].len(), 1);
        assert_eq!(results[2].len(), 1);
    }
}
