//! translint-core: Core abstractions for i18n call analysis
//!
//! This crate provides:
//! - `Token`/`TokenKind`: the lexical units handed over by the tokenizer host
//! - `TokenStream`: an indexable token list with resolved parenthesis matching
//!   and bounded find-next/find-previous queries
//! - `Edit`/`Changeset`: atomic replacement sets for fixable diagnostics

mod edit;
pub mod token;

pub use edit::{Changeset, Edit, EditError};
pub use token::{Token, TokenKind, TokenStream, TokenStreamError};
