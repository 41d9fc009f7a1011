//! Behaviour of `identifier_of` and `parse` on representative values.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=typeident=trace cargo test -p typeident --test identifiers
//! ```

use typeident::{
    identifier_of, parse, type_identifier_of, NativeType, Object, TypeIdentifier, Value, TYPE_KEY,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ident(namespace: Option<&str>, name: &str, version: u64) -> TypeIdentifier {
    TypeIdentifier::new(namespace.map(str::to_string), name, version)
}

/// A representative whose instances are created with a constructor, like
/// `Identity` with an `Identity.prototype`.
fn identity() -> (Object, Object) {
    Object::builder(NativeType::Function)
        .property(TYPE_KEY, "my-package/Identity")
        .build_with_prototype(Object::builder(NativeType::Object))
}

/// A plain-object representative shared by `Nothing` and `Just`.
fn maybe() -> Object {
    Object::builder(NativeType::Object)
        .property(TYPE_KEY, "my-package/Maybe")
        .constructor(&Object::function())
        .build()
}

#[test]
fn nullish_values() {
    init_tracing();
    assert_eq!(identifier_of(&Value::Null), "Null");
    assert_eq!(identifier_of(&Value::Undefined), "Undefined");
}

#[test]
fn missing_or_invalid_custom_identifiers() {
    init_tracing();

    let null_constructor = Object::plain();
    assert_eq!(identifier_of(&null_constructor), "Object");

    let null_identifier = Object::builder(NativeType::Object)
        .constructor(&Object::builder(NativeType::Object).property(TYPE_KEY, Value::Null).build())
        .build();
    assert_eq!(identifier_of(&null_identifier), "Object");

    let boxed_identifier = Object::builder(NativeType::Object)
        .constructor(
            &Object::builder(NativeType::Object)
                .property(TYPE_KEY, Object::boxed(Value::from("")))
                .build(),
        )
        .build();
    assert_eq!(identifier_of(&boxed_identifier), "Object");
}

#[test]
fn constructor_instances_and_prototype() {
    init_tracing();
    let (rep, proto) = identity();
    let instance = Object::builder(NativeType::Object)
        .constructor(&rep)
        .property("value", 42)
        .build();

    assert_eq!(identifier_of(&instance), "my-package/Identity");
    assert_eq!(identifier_of(&rep), "Function");
    assert_eq!(identifier_of(&proto), "Object");
}

#[test]
fn plain_object_representative() {
    init_tracing();
    let rep = maybe();
    let nothing = Object::builder(NativeType::Object)
        .constructor(&rep)
        .property("isNothing", true)
        .build();
    let just = Object::builder(NativeType::Object)
        .constructor(&rep)
        .property("isJust", true)
        .property("value", 0)
        .build();

    assert_eq!(identifier_of(&nothing), "my-package/Maybe");
    assert_eq!(identifier_of(&just), "my-package/Maybe");
    assert_eq!(identifier_of(&rep), "Object");
    assert_eq!(identifier_of(rep.constructor().unwrap()), "Function");
}

#[test]
fn primitives_and_boxed_primitives() {
    init_tracing();
    assert_eq!(identifier_of(&Value::from(false)), "Boolean");
    assert_eq!(identifier_of(&Value::from(0)), "Number");
    assert_eq!(identifier_of(&Value::from("")), "String");

    assert_eq!(identifier_of(&Object::boxed(Value::from(false))), "Boolean");
    assert_eq!(identifier_of(&Object::boxed(Value::from(0))), "Number");
    assert_eq!(identifier_of(&Object::boxed(Value::from(""))), "String");
}

#[test]
fn parse_edge_cases() {
    init_tracing();
    let cases = [
        ("", ident(None, "", 0)),
        ("Type", ident(None, "Type", 0)),
        ("/Type", ident(None, "/Type", 0)),
        ("@0", ident(None, "@0", 0)),
        ("Type@1", ident(None, "Type@1", 0)),
        ("Type@X", ident(None, "Type@X", 0)),
        ("package/Type", ident(Some("package"), "Type", 0)),
        ("package/Type/X", ident(Some("package/Type"), "X", 0)),
        ("@scope/package/Type", ident(Some("@scope/package"), "Type", 0)),
        ("foo/\n@1", ident(Some("foo"), "\n", 1)),
        ("package/Type@1", ident(Some("package"), "Type", 1)),
        ("package/Type@999", ident(Some("package"), "Type", 999)),
        ("package/Type@X", ident(Some("package"), "Type@X", 0)),
        ("package////@3@2@1@1", ident(Some("package///"), "@3@2@1", 1)),
    ];

    for (input, expected) in cases {
        assert_eq!(parse(input), expected, "parsing {input:?}");
    }
}

#[test]
fn identifier_round_trip() {
    init_tracing();
    let rep = Object::builder(NativeType::Function)
        .property(TYPE_KEY, "my-package/Identity@1")
        .build();
    let instance = Value::Object(Object::builder(NativeType::Object).constructor(&rep).build());

    assert_eq!(
        type_identifier_of(&instance),
        ident(Some("my-package"), "Identity", 1)
    );
    assert_eq!(
        parse(identifier_of(&Value::Array(vec![]))),
        ident(None, "Array", 0)
    );
}
