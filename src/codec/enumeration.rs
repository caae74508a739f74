//! Closed name/ordinal tables for enum fields.
//!
//! Unknown ordinals and names never fail: they degrade to the
//! `Unrecognized` sentinel (ordinal -1), which renders as `"UNKNOWN"`.

use std::fmt;

use serde_json::Value;

/// Name an unrecognized value renders as.
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Ordinal carried by the unrecognized sentinel.
pub const UNRECOGNIZED_ORDINAL: i32 = -1;

/// An enum field type.
pub trait Enumeration:
    Copy + Eq + fmt::Debug + Default + Send + Sync + 'static
{
    /// Sentinel for ordinals and names outside the table.
    const UNRECOGNIZED: Self;

    /// Every declared value in table order, without the sentinel.
    const VALUES: &'static [Self];

    /// Look up an ordinal.
    fn from_i32(value: i32) -> Self;

    /// Wire ordinal.
    fn to_i32(self) -> i32;

    /// Look up a name.
    fn from_str_name(name: &str) -> Self;

    /// Declared name.
    fn as_str_name(self) -> &'static str;

    /// True for the zero ordinal, which is never written.
    fn is_default(self) -> bool {
        self.to_i32() == 0
    }

    /// Coerce a JSON name or ordinal.
    fn from_json(value: &Value) -> Self {
        match value {
            Value::String(name) => Self::from_str_name(name),
            Value::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(Self::from_i32)
                .unwrap_or(Self::UNRECOGNIZED),
            _ => Self::UNRECOGNIZED,
        }
    }

    /// Render as a JSON name.
    fn to_json(self) -> Value {
        Value::String(self.as_str_name().to_owned())
    }
}

/// Declare an enum type and its name/ordinal table.
///
/// An `Unrecognized` variant is appended and `Default` resolves to the
/// zero ordinal.
///
/// ```
/// use sei_proto::codec::Enumeration;
///
/// sei_proto::proto_enum! {
///     /// Traffic light.
///     pub enum Light {
///         Red = 0 => "RED",
///         Green = 1 => "GREEN",
///     }
/// }
///
/// assert_eq!(Light::default(), Light::Red);
/// assert_eq!(Light::from_i32(7), Light::Unrecognized);
/// assert_eq!(Light::Unrecognized.as_str_name(), "UNKNOWN");
/// ```
#[macro_export]
macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $text:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Ordinal or name outside the known table.
            Unrecognized,
        }

        impl $crate::codec::Enumeration for $name {
            const UNRECOGNIZED: Self = Self::Unrecognized;

            const VALUES: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn from_i32(value: i32) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    _ => Self::Unrecognized,
                }
            }

            fn to_i32(self) -> i32 {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unrecognized => $crate::codec::UNRECOGNIZED_ORDINAL,
                }
            }

            fn from_str_name(name: &str) -> Self {
                match name {
                    $( $text => Self::$variant, )+
                    _ => Self::Unrecognized,
                }
            }

            fn as_str_name(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                    Self::Unrecognized => $crate::codec::UNKNOWN_NAME,
                }
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                <Self as $crate::codec::Enumeration>::from_i32(0)
            }
        }
    };
}
