//! Built-in value categories used as fallback identifiers.

use std::fmt;

/// Coarse category of a value, independent of any custom identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NativeType {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Array,
    Object,
    Function,
    Date,
    RegExp,
    Error,
    Map,
    Set,
}

impl NativeType {
    /// Returns the fallback identifier for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NativeType::Undefined => "Undefined",
            NativeType::Null => "Null",
            NativeType::Boolean => "Boolean",
            NativeType::Number => "Number",
            NativeType::BigInt => "BigInt",
            NativeType::String => "String",
            NativeType::Symbol => "Symbol",
            NativeType::Array => "Array",
            NativeType::Object => "Object",
            NativeType::Function => "Function",
            NativeType::Date => "Date",
            NativeType::RegExp => "RegExp",
            NativeType::Error => "Error",
            NativeType::Map => "Map",
            NativeType::Set => "Set",
        }
    }

    /// Returns true for `Null` and `Undefined`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, NativeType::Null | NativeType::Undefined)
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
