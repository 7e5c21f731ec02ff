//! Errors raised while filling and resolving a document.

use thiserror::Error;

/// A raw value rejected while setting a property.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("in {location}, '{value}' is not a valid {property}: expected {expected}")]
    Invalid {
        property: &'static str,
        location: String,
        value: String,
        expected: String,
    },

    #[error("in {location}, {property} '{value}' not found")]
    ResourceNotFound {
        property: &'static str,
        location: String,
        value: String,
    },

    #[error("in {location}, unknown font '{value}', falling back to default")]
    UnknownFont {
        property: &'static str,
        location: String,
        value: String,
    },
}

impl ValidationError {
    pub fn property(&self) -> &'static str {
        match self {
            ValidationError::Invalid { property, .. }
            | ValidationError::ResourceNotFound { property, .. }
            | ValidationError::UnknownFont { property, .. } => property,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            ValidationError::Invalid { location, .. }
            | ValidationError::ResourceNotFound { location, .. }
            | ValidationError::UnknownFont { location, .. } => location,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("{property} is required for {location}")]
    RequiredMissing {
        property: &'static str,
        location: String,
    },
}

/// Problems with the shape of a description rather than with a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("in {location}, unknown key '{key}' ignored")]
    UnknownKey { key: String, location: String },

    #[error("in {location}, '{key}' does not address an existing item")]
    BadIndex { key: String, location: String },

    #[error("in {location}, {key} should be {expected}")]
    Shape {
        key: &'static str,
        location: String,
        expected: &'static str,
    },

    #[error("in {location}, page type '{value}' is unknown, expected one of {expected}")]
    UnknownPageType {
        value: String,
        location: String,
        expected: String,
    },

    #[error("in {location}, unknown style '{name}'")]
    UnknownStyle { name: String, location: String },
}
