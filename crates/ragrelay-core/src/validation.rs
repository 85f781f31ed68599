//! Request field validation.
//!
//! Validation runs at the HTTP boundary before any collaborator is touched.
//! A failed check yields a [`ValidationError`] listing every offending field,
//! which the HTTP adapter renders as a 422 response.

use std::fmt;

use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (e.g. `max_new_tokens`).
    pub field: &'static str,
    /// Human-readable explanation.
    pub message: String,
    /// Stable machine-readable kind (e.g. `range`, `too_short`).
    pub kind: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            kind,
        }
    }

    /// String shorter than `min` characters.
    pub fn too_short(field: &'static str, min: usize) -> Self {
        let unit = if min == 1 { "character" } else { "characters" };
        Self::new(
            field,
            "too_short",
            format!("must have at least {min} {unit}"),
        )
    }

    /// Value outside the inclusive range `[min, max]`.
    pub fn out_of_range<T: fmt::Display>(field: &'static str, min: T, max: T) -> Self {
        Self::new(field, "range", format!("must be between {min} and {max}"))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One or more request fields failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join_fields(.fields))]
pub struct ValidationError {
    fields: Vec<FieldError>,
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// `Ok(())` when `fields` is empty, otherwise an error carrying them.
    pub fn from_fields(fields: Vec<FieldError>) -> Result<(), Self> {
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Self { fields })
        }
    }

    pub fn single(field: FieldError) -> Self {
        Self {
            fields: vec![field],
        }
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<FieldError> {
        self.fields
    }
}

/// Types that check their own field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}
