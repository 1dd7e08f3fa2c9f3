//! Token-level replacement changesets
//!
//! Fixable diagnostics carry a `Changeset`: an ordered bracket of
//! `(position, original, replacement)` edits that the host applies
//! atomically. Applying a changeset to the original source text is the
//! host's job; `apply_to` only rewrites a copy of token payloads, which is
//! what the tests assert against.

use thiserror::Error;

/// Errors that can occur during changeset application
#[derive(Debug, Error)]
pub enum EditError {
    #[error("Edit position {position} out of bounds for {len} tokens")]
    PositionOutOfBounds { position: usize, len: usize },

    #[error("Token content at position {0} does not match the edit's original text")]
    OriginalMismatch(usize),

    #[error("Multiple edits target position {0}")]
    DuplicatePosition(usize),
}

/// A single token replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Token index the replacement applies to
    pub position: usize,
    /// The token text the edit was computed against
    pub original: String,
    /// The replacement text
    pub replacement: String,
}

impl Edit {
    pub fn new(position: usize, original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            position,
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

/// An ordered group of edits that apply together or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changeset {
    edits: Vec<Edit>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a replacement of the token at `position`.
    pub fn replace(
        &mut self,
        position: usize,
        original: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        self.edits.push(Edit::new(position, original, replacement));
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every edit to a copy of token texts, all-or-nothing.
    ///
    /// Every edit is validated against `texts` before the first write, so a
    /// failed changeset leaves the slice untouched.
    pub fn apply_to(&self, texts: &mut [String]) -> Result<(), EditError> {
        let mut seen = vec![false; texts.len()];
        for edit in &self.edits {
            let current = texts.get(edit.position).ok_or(EditError::PositionOutOfBounds {
                position: edit.position,
                len: texts.len(),
            })?;
            if *current != edit.original {
                return Err(EditError::OriginalMismatch(edit.position));
            }
            if seen[edit.position] {
                return Err(EditError::DuplicatePosition(edit.position));
            }
            seen[edit.position] = true;
        }

        for edit in &self.edits {
            texts[edit.position] = edit.replacement.clone();
        }

        Ok(())
    }
}
