//! The parsed form of a type identifier and the grammar that produces it.
//!
//! Identifiers have the shape `<namespace>/<name>[@<version>]`. The grammar
//! is a single pattern:
//!
//! ```text
//! (?s)^(.+)/(.+?)(?:@([0-9]+))?$
//! ```
//!
//! - the namespace is greedy, so it keeps every `/` except the last one that
//!   still leaves a non-empty name (`@scope/package/Type` has namespace
//!   `@scope/package`);
//! - the name is lazy, so a trailing `@<digits>` goes to the version;
//! - `.` matches newlines, so multiline input is parsed like any other.
//!
//! Any string that does not match is a bare name with no namespace and
//! version 0. Parsing never fails.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::IdentError;

/// Grammar for namespaced identifiers.
const GRAMMAR: &str = r"(?s)^(.+)/(.+?)(?:@([0-9]+))?$";

fn grammar() -> &'static Regex {
    static GRAMMAR_RE: OnceLock<Regex> = OnceLock::new();
    GRAMMAR_RE.get_or_init(|| Regex::new(GRAMMAR).expect("identifier grammar is a valid pattern"))
}

/// A type identifier split into its components.
///
/// Produced fresh by every [`parse`] call. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeIdentifier {
    namespace: Option<String>,
    name: String,
    version: u64,
}

impl TypeIdentifier {
    /// Creates an identifier from raw components without any checks.
    #[must_use]
    pub fn new(namespace: Option<String>, name: impl Into<String>, version: u64) -> Self {
        Self {
            namespace,
            name: name.into(),
            version,
        }
    }

    /// Creates an identifier whose rendered form parses back to the same
    /// components.
    pub fn try_new(
        namespace: Option<&str>,
        name: &str,
        version: u64,
    ) -> Result<Self, IdentError> {
        match namespace {
            Some("") => return Err(IdentError::EmptyNamespace),
            Some(_) if name.is_empty() => return Err(IdentError::EmptyName),
            Some(_) if name.contains('/') => {
                return Err(IdentError::NameContainsSeparator {
                    name: name.to_string(),
                })
            }
            Some(_) if version == 0 && has_version_suffix(name) => {
                return Err(IdentError::AmbiguousVersion {
                    name: name.to_string(),
                })
            }
            Some(_) => {}
            None if version > 0 => return Err(IdentError::VersionWithoutNamespace { version }),
            None if grammar().is_match(name) => {
                return Err(IdentError::AmbiguousName {
                    name: name.to_string(),
                })
            }
            None => {}
        }

        Ok(Self::new(namespace.map(str::to_string), name, version))
    }

    /// Parses an identifier. See [`parse`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        parse(s)
    }

    /// Returns the namespace, if the identifier had one.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the version, 0 when none was given.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns true if the identifier has a namespace.
    #[must_use]
    pub fn is_namespaced(&self) -> bool {
        self.namespace.is_some()
    }
}

/// Renders `<namespace>/<name>`, followed by `@<version>` when the version
/// is non-zero. Without a namespace only the name is written.
impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => {
                write!(f, "{}/{}", namespace, self.name)?;
                if self.version > 0 {
                    write!(f, "@{}", self.version)?;
                }
                Ok(())
            }
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for TypeIdentifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for TypeIdentifier {
    fn from(s: &str) -> Self {
        parse(s)
    }
}

/// Decomposes `s` into namespace, name and version.
///
/// Strings outside the namespaced grammar (including `""`, anything without
/// a `/`, and `/Type`) yield no namespace, the whole input as the name, and
/// version 0. Version digits too large for a `u64` saturate at `u64::MAX`.
#[must_use]
pub fn parse(s: &str) -> TypeIdentifier {
    let Some(caps) = grammar().captures(s) else {
        tracing::trace!(identifier = s, "identifier has no namespace");
        return TypeIdentifier::new(None, s, 0);
    };

    let version = caps.get(3).map_or(0, |digits| {
        digits.as_str().parse::<u64>().unwrap_or_else(|_| {
            tracing::trace!(identifier = s, "identifier version saturated");
            u64::MAX
        })
    });

    TypeIdentifier::new(
        caps.get(1).map(|m| m.as_str().to_string()),
        caps.get(2).map_or("", |m| m.as_str()),
        version,
    )
}

/// Returns true if `name` ends with `@` followed by one or more ASCII digits.
fn has_version_suffix(name: &str) -> bool {
    name.rsplit_once('@')
        .is_some_and(|(_, digits)| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
