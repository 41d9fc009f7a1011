//! # typeident
//!
//! Type identifiers for duck-typed values.
//!
//! ## Design Principles
//!
//! - Every value has an identifier; nothing here fails or panics
//! - Custom identifiers are declared by a type representative, never guessed
//! - Only a string primitive counts as a custom identifier
//! - Parsing accepts any string and degrades to "the whole string is a name"
//!
//! ## Identifier Format
//!
//! Custom identifiers use the format `<namespace>/<name>[@<version>]`.
//!
//! Examples:
//! - `my-package/Identity`
//! - `my-package/Identity@1`
//! - `@scope/package/Maybe@2`
//!
//! Values without a custom identifier report their built-in category:
//! `Null`, `Undefined`, `Boolean`, `Number`, `String`, `Array`, `Object`,
//! `Function` and so on.

mod error;
mod identify;
mod macros;
mod native;
mod types;
mod value;

pub use error::IdentError;
pub use identify::{identifier_of, type_identifier_of, Identify};
pub use native::NativeType;
pub use types::{parse, TypeIdentifier};
pub use value::{Object, ObjectBuilder, Value};

/// Property under which a type representative declares its identifier.
pub const TYPE_KEY: &str = "@@type";
