//! Deriving a type identifier from a value.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::{parse, NativeType, Object, TypeIdentifier, Value, TYPE_KEY};

/// A value whose type can be identified.
///
/// `native_type` is the built-in category used as the fallback identifier.
/// `declared_type` is whatever the value's type representative stores under
/// [`TYPE_KEY`]; only a string primitive counts as a custom identifier.
pub trait Identify {
    /// Returns the built-in category of the value.
    fn native_type(&self) -> NativeType;

    /// Returns the custom identifier declared by the value's type
    /// representative, if the representative declares anything.
    fn declared_type(&self) -> Option<&Value> {
        None
    }
}

/// Returns the type identifier of `value`.
///
/// Null-ish values give `"Null"` or `"Undefined"`. Otherwise a string
/// primitive declared by the type representative is returned verbatim, and
/// anything else falls back to the native category name.
pub fn identifier_of<T: Identify + ?Sized>(value: &T) -> &str {
    let native = value.native_type();
    if native.is_nullish() {
        return native.as_str();
    }

    match value.declared_type() {
        Some(Value::String(identifier)) => identifier.as_str(),
        Some(other) => {
            tracing::trace!(
                declared = %other.native_type(),
                fallback = %native,
                "ignoring non-string type identifier"
            );
            native.as_str()
        }
        None => native.as_str(),
    }
}

/// Returns the parsed type identifier of `value`.
#[must_use]
pub fn type_identifier_of<T: Identify + ?Sized>(value: &T) -> TypeIdentifier {
    parse(identifier_of(value))
}

impl Identify for Value {
    fn native_type(&self) -> NativeType {
        Value::native_type(self)
    }

    fn declared_type(&self) -> Option<&Value> {
        self.as_object()?.declared_type()
    }
}

impl Identify for Object {
    fn native_type(&self) -> NativeType {
        self.class()
    }

    fn declared_type(&self) -> Option<&Value> {
        let representative = self.constructor()?;
        // A prototype carries its constructor but is not an instance of it.
        if representative.is_prototype(self) {
            return None;
        }
        representative.get(TYPE_KEY)
    }
}

macro_rules! impl_native {
    ($native:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Identify for $ty {
                fn native_type(&self) -> NativeType {
                    NativeType::$native
                }
            }
        )+
    };
}

impl_native!(Boolean => bool);
impl_native!(Number => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_native!(BigInt => i128, u128);
impl_native!(String => char, str, String);
impl_native!(Undefined => ());

impl<T> Identify for [T] {
    fn native_type(&self) -> NativeType {
        NativeType::Array
    }
}

impl<T, const N: usize> Identify for [T; N] {
    fn native_type(&self) -> NativeType {
        NativeType::Array
    }
}

impl<T> Identify for Vec<T> {
    fn native_type(&self) -> NativeType {
        NativeType::Array
    }
}

impl<T> Identify for VecDeque<T> {
    fn native_type(&self) -> NativeType {
        NativeType::Array
    }
}

impl<K, V, S> Identify for HashMap<K, V, S> {
    fn native_type(&self) -> NativeType {
        NativeType::Map
    }
}

impl<K, V> Identify for BTreeMap<K, V> {
    fn native_type(&self) -> NativeType {
        NativeType::Map
    }
}

impl<T, S> Identify for HashSet<T, S> {
    fn native_type(&self) -> NativeType {
        NativeType::Set
    }
}

impl<T> Identify for BTreeSet<T> {
    fn native_type(&self) -> NativeType {
        NativeType::Set
    }
}

impl<T: Identify> Identify for Option<T> {
    fn native_type(&self) -> NativeType {
        self.as_ref().map_or(NativeType::Null, Identify::native_type)
    }

    fn declared_type(&self) -> Option<&Value> {
        self.as_ref()?.declared_type()
    }
}

macro_rules! impl_delegate {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<T: Identify + ?Sized> Identify for $wrapper {
                fn native_type(&self) -> NativeType {
                    (**self).native_type()
                }

                fn declared_type(&self) -> Option<&Value> {
                    (**self).declared_type()
                }
            }
        )+
    };
}

impl_delegate!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
