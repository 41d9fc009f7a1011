//! Macros for declaring custom type identifiers on Rust types.

/// Gives a Rust type a custom type identifier.
///
/// This implements [`Identify`](crate::Identify) for the type with:
/// - `Object` as the native category
/// - the identifier as a string primitive on a shared representative
///
/// Generic types list their parameters after `impl`; every instantiation
/// shares one identifier.
///
/// # Example
///
/// ```ignore
/// struct Identity<T>(T);
/// struct Config;
///
/// declare_type!(impl<T> Identity<T>, "my-package/Identity@1");
/// declare_type!(Config, "my-package/Config");
///
/// assert_eq!(identifier_of(&Config), "my-package/Config");
/// ```
#[macro_export]
macro_rules! declare_type {
    (@body $identifier:expr) => {
        fn native_type(&self) -> $crate::NativeType {
            $crate::NativeType::Object
        }

        fn declared_type(&self) -> ::std::option::Option<&$crate::Value> {
            static IDENTIFIER: ::std::sync::OnceLock<$crate::Value> =
                ::std::sync::OnceLock::new();
            ::std::option::Option::Some(IDENTIFIER.get_or_init(|| {
                $crate::Value::String(::std::string::String::from($identifier))
            }))
        }
    };

    (impl<$($param:ident),+> $ty:ty, $identifier:expr) => {
        impl<$($param),+> $crate::Identify for $ty {
            $crate::declare_type!(@body $identifier);
        }
    };

    ($ty:ty, $identifier:expr) => {
        impl $crate::Identify for $ty {
            $crate::declare_type!(@body $identifier);
        }
    };
}
