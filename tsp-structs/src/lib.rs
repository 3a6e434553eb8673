pub mod config;
pub mod core;

/// Declares a serde struct whose optional fields fall back to a default
/// through a same-named getter.
///
/// `field: Option<T> = default,` emits `pub field: Option<T>` plus
/// `fn field(&self) -> T`. Plain `field: T,` emits a `#[serde(default)]`
/// field, so nested sections may be omitted from the json entirely.
#[macro_export]
macro_rules! serializable_struct_with_defaults {
    ( @ $name:ident { } -> ($($fields:tt)*) ($($getters:tt)*) ) => (
        #[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $($fields)*
        }
        impl $name {
            $($getters)*
        }
    );
    ( @ $name:ident { $(#[$attr:meta])* $param:ident : Option<$type:ty> = $default:expr, $($rest:tt)* } -> ($($fields:tt)*) ($($getters:tt)*) ) => (
        serializable_struct_with_defaults!(@ $name { $($rest)* } -> (
            $($fields)*
            $(#[$attr])*
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub $param : Option<$type>,
        ) (
            $($getters)*
            pub fn $param(&self) -> $type {
                self.$param.unwrap_or($default)
            }
        ));
    );
    ( @ $name:ident { $(#[$attr:meta])* $param:ident : $type:ty, $($rest:tt)* } -> ($($fields:tt)*) ($($getters:tt)*) ) => (
        serializable_struct_with_defaults!(@ $name { $($rest)* } -> (
            $($fields)*
            $(#[$attr])*
            #[serde(default)]
            pub $param : $type,
        ) (
            $($getters)*
        ));
    );
    ( $name:ident { $( $rest:tt)* } ) => {
        serializable_struct_with_defaults!(@ $name { $($rest)* } -> () ());
    };
}
