//! Dynamic values with explicit type representatives.
//!
//! An [`Object`] may point at a constructor, which is itself an object: the
//! type representative shared by all of its instances. A representative
//! declares a custom identifier by holding a string under
//! [`TYPE_KEY`](crate::TYPE_KEY).
//!
//! Representatives built with [`ObjectBuilder::build_with_prototype`] also
//! remember their prototype, the object every instance is modelled on. The
//! prototype's constructor is the representative, but the prototype is not
//! an instance of it.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock, Weak};

use crate::NativeType;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Returns the built-in category of this value.
    #[must_use]
    pub fn native_type(&self) -> NativeType {
        match self {
            Value::Undefined => NativeType::Undefined,
            Value::Null => NativeType::Null,
            Value::Boolean(_) => NativeType::Boolean,
            Value::Number(_) => NativeType::Number,
            Value::String(_) => NativeType::String,
            Value::Array(_) => NativeType::Array,
            Value::Object(object) => object.class(),
        }
    }

    /// Returns the string if this is a string primitive.
    ///
    /// Boxed strings are objects and return `None`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the object if this is a reference value.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

/// A reference value. Clones share identity; equality is identity.
#[derive(Debug, Clone)]
pub struct Object(Arc<ObjectData>);

#[derive(Debug)]
struct ObjectData {
    class: NativeType,
    constructor: Option<Object>,
    prototype: OnceLock<Weak<ObjectData>>,
    properties: BTreeMap<String, Value>,
    primitive: Option<Value>,
}

impl Object {
    /// Starts building an object of the given class.
    #[must_use]
    pub fn builder(class: NativeType) -> ObjectBuilder {
        ObjectBuilder {
            class,
            constructor: None,
            properties: BTreeMap::new(),
            primitive: None,
        }
    }

    /// Creates an empty plain object with no constructor.
    #[must_use]
    pub fn plain() -> Self {
        Self::builder(NativeType::Object).build()
    }

    /// Creates an empty function object with no constructor.
    #[must_use]
    pub fn function() -> Self {
        Self::builder(NativeType::Function).build()
    }

    /// Wraps a primitive in an object of the primitive's class.
    ///
    /// Objects are returned unchanged; `Null` and `Undefined` produce an
    /// empty plain object.
    #[must_use]
    pub fn boxed(value: Value) -> Self {
        match value {
            Value::Object(object) => object,
            Value::Null | Value::Undefined => Self::plain(),
            primitive => {
                let class = primitive.native_type();
                let mut builder = Self::builder(class);
                builder.primitive = Some(primitive);
                builder.build()
            }
        }
    }

    /// Returns the object's built-in class.
    #[must_use]
    pub fn class(&self) -> NativeType {
        self.0.class
    }

    /// Returns the type representative, if any.
    #[must_use]
    pub fn constructor(&self) -> Option<&Object> {
        self.0.constructor.as_ref()
    }

    /// Returns the prototype this representative was built with, if it is
    /// still alive.
    #[must_use]
    pub fn prototype(&self) -> Option<Object> {
        self.0.prototype.get().and_then(Weak::upgrade).map(Object)
    }

    /// Returns true if `other` is this representative's prototype.
    #[must_use]
    pub fn is_prototype(&self, other: &Object) -> bool {
        self.0
            .prototype
            .get()
            .is_some_and(|weak| std::ptr::eq(weak.as_ptr(), Arc::as_ptr(&other.0)))
    }

    /// Looks up an own property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.properties.get(key)
    }

    /// Iterates over own properties in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the wrapped primitive of a boxed value.
    #[must_use]
    pub fn primitive(&self) -> Option<&Value> {
        self.0.primitive.as_ref()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Builder for [`Object`].
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    class: NativeType,
    constructor: Option<Object>,
    properties: BTreeMap<String, Value>,
    primitive: Option<Value>,
}

impl ObjectBuilder {
    /// Sets the type representative.
    #[must_use]
    pub fn constructor(mut self, representative: &Object) -> Self {
        self.constructor = Some(representative.clone());
        self
    }

    /// Sets an own property, replacing any previous value.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Builds the object.
    #[must_use]
    pub fn build(self) -> Object {
        Object(Arc::new(self.into_data()))
    }

    /// Builds this object as a representative together with its prototype.
    ///
    /// The prototype's constructor is set to the representative, replacing
    /// any constructor given on `prototype`. Returns
    /// `(representative, prototype)`.
    #[must_use]
    pub fn build_with_prototype(self, prototype: ObjectBuilder) -> (Object, Object) {
        let representative = self.build();
        let prototype = prototype.constructor(&representative).build();
        // The cell was created empty just above.
        let _ = representative
            .0
            .prototype
            .set(Arc::downgrade(&prototype.0));
        (representative, prototype)
    }

    fn into_data(self) -> ObjectData {
        ObjectData {
            class: self.class,
            constructor: self.constructor,
            prototype: OnceLock::new(),
            properties: self.properties,
            primitive: self.primitive,
        }
    }
}
