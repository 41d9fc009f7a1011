//! Error types for building type identifiers.

use thiserror::Error;

/// Errors returned when identifier components cannot be rendered into a
/// string that parses back to the same components.
///
/// Parsing itself never fails; these only come from
/// [`TypeIdentifier::try_new`](crate::TypeIdentifier::try_new).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentError {
    /// The namespace is present but empty.
    #[error("namespace cannot be empty")]
    EmptyNamespace,

    /// A namespaced identifier has an empty name.
    #[error("name cannot be empty when a namespace is given")]
    EmptyName,

    /// The name contains the namespace separator.
    #[error("name '{name}' contains the '/' separator")]
    NameContainsSeparator { name: String },

    /// A version was given without a namespace.
    #[error("version {version} requires a namespace")]
    VersionWithoutNamespace { version: u64 },

    /// A namespace-less name that would parse as namespaced.
    #[error("name '{name}' would parse as a namespaced identifier")]
    AmbiguousName { name: String },

    /// A version-0 name whose trailing `@<digits>` would parse as a version.
    #[error("name '{name}' ends with a version suffix")]
    AmbiguousVersion { name: String },
}

impl IdentError {
    /// Returns true if this error concerns an empty component.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdentError::EmptyNamespace | IdentError::EmptyName)
    }

    /// Returns true if the components are individually fine but would be
    /// read back differently.
    pub fn is_ambiguous(&self) -> bool {
        matches!(
            self,
            IdentError::AmbiguousName { .. } | IdentError::AmbiguousVersion { .. }
        )
    }
}
