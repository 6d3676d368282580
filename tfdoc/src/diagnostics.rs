//! Non-fatal findings collected during generation.
//!
//! Generation never logs warnings itself; they are pushed here and returned
//! with the result so callers decide how to surface them.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Required/optional argument documented without a description
    MissingDescription { entity: String, field: String },
    /// Deprecated field still documented
    Deprecated { entity: String, field: String },
    /// Index lists an entity the manifest has no schema for
    UnknownIndexEntry { name: String },
    /// Prose after the last code block of a usage section
    TrailingUsageProse { entity: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingDescription { entity, field } => {
                write!(f, "{}: argument `{}` has no description", entity, field)
            }
            Warning::Deprecated { entity, field } => {
                write!(f, "{}: documenting deprecated field `{}`", entity, field)
            }
            Warning::UnknownIndexEntry { name } => {
                write!(f, "index lists `{}` but no schema was supplied", name)
            }
            Warning::TrailingUsageProse { entity } => {
                write!(f, "{}: prose after the last code block was dropped", entity)
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}
