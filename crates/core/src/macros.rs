//! Code generation for value types
//!
//! - [`impl_text_boundary!`](crate::impl_text_boundary): `Display`, `FromStr`
//!   and `TryFrom<&str>` in terms of [`SpanSerializable`](crate::value::SpanSerializable)
//! - [`impl_serde_as_text!`](crate::impl_serde_as_text): serde as the canonical text
//! - [`closed_value_type!`](crate::closed_value_type): a value type restricted to
//!   a fixed list of ASCII members

/// Implement `Display`, `FromStr` and `TryFrom<&str>` through `SpanSerializable`
///
/// Formatting an uninitialized value fails with `fmt::Error`, so
/// `to_string()` panics on it. Use
/// [`SpanSerializable::format_to_string`](crate::value::SpanSerializable::format_to_string)
/// where the value may be uninitialized.
#[macro_export]
macro_rules! impl_text_boundary {
    ($name:ty) => {
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut buffer =
                    [0u8; <$name as $crate::value::SpanSerializable>::MAX_SERIALIZED_BYTE_LENGTH];
                match $crate::value::SpanSerializable::try_format(self, &mut buffer) {
                    Ok(written) => {
                        let text = ::std::str::from_utf8(&buffer[..written])
                            .map_err(|_| ::std::fmt::Error)?;
                        f.write_str(text)
                    }
                    Err(_) => Err(::std::fmt::Error),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ValueError;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <$name as $crate::value::SpanSerializable>::parse(s)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::error::ValueError;

            fn try_from(s: &str) -> $crate::error::Result<Self> {
                <$name as $crate::value::SpanSerializable>::parse(s)
            }
        }
    };
}

/// Implement serde `Serialize`/`Deserialize` as the canonical text form
#[macro_export]
macro_rules! impl_serde_as_text {
    ($name:ty) => {
        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                let text = $crate::value::SpanSerializable::format_to_string(self)
                    .map_err(<S::Error as $crate::__serde::ser::Error>::custom)?;
                serializer.serialize_str(&text)
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let text =
                    <::std::string::String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::value::SpanSerializable>::parse(&text)
                    .map_err(<D::Error as $crate::__serde::de::Error>::custom)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __count {
    ($($item:tt)*) => { <[()]>::len(&[$($crate::__unit!($item)),*]) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __unit {
    ($item:tt) => {
        ()
    };
}

/// Declare a value type whose valid values are a fixed list of ASCII strings
///
/// Generates the struct (default: uninitialized), one associated constant
/// per member, `ALL`, a lazily built membership set, the value-type
/// contracts, the text boundary and serde.
///
/// ```ignore
/// closed_value_type! {
///     /// Grammatical number
///     pub struct Number {
///         max_length: 8,
///         fold_case: false,
///         /// One
///         SINGULAR = "singular",
///         /// More than one
///         PLURAL = "plural",
///     }
/// }
/// ```
#[macro_export]
macro_rules! closed_value_type {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            max_length: $max:expr,
            fold_case: $fold:expr,
            $(
                $(#[$member_meta:meta])*
                $member:ident = $text:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        $vis struct $name(::std::option::Option<$crate::ascii::AsciiString>);

        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: $name =
                    $name(::std::option::Option::Some($crate::ascii::AsciiString::from_static($text)));
            )+

            /// Every valid value
            pub const ALL: [$name; $crate::__count!($($member)+)] = [$($name::$member),+];

            fn members() -> &'static $crate::frozen::FrozenSet<$crate::ascii::AsciiString> {
                static MEMBERS: $crate::__once_cell::sync::Lazy<
                    $crate::frozen::FrozenSet<$crate::ascii::AsciiString>,
                > = $crate::__once_cell::sync::Lazy::new(|| {
                    $crate::frozen::FrozenSet::build(
                        stringify!($name),
                        $name::ALL.iter().filter_map(|m| m.0.clone()),
                    )
                });
                &MEMBERS
            }

            /// Whether `s` is exactly one of the valid values
            pub fn contains(s: &str) -> bool {
                Self::members().contains(s)
            }

            /// The text of this value
            ///
            /// # Errors
            ///
            /// Returns `ValueError::Uninitialized` for a default instance.
            pub fn as_str(&self) -> $crate::error::Result<&str> {
                self.0
                    .as_ref()
                    .map($crate::ascii::AsciiString::as_str)
                    .ok_or_else(|| $crate::error::ValueError::uninitialized(stringify!($name)))
            }

            fn lookup(s: &str) -> ::std::option::Option<Self> {
                Self::members()
                    .get(s)
                    .map(|m| $name(::std::option::Option::Some(m.clone())))
            }
        }

        impl $crate::value::ValueType for $name {
            const TYPE_NAME: &'static str = stringify!($name);
        }

        impl $crate::value::EquatableValue for $name {
            type Underlying = $crate::ascii::AsciiString;

            fn is_valid_value(value: &$crate::ascii::AsciiString) -> bool {
                Self::contains(value.as_str())
            }

            fn from_value(value: $crate::ascii::AsciiString) -> $crate::error::Result<Self> {
                Self::lookup(value.as_str()).ok_or_else(|| {
                    $crate::error::ValueError::out_of_range(stringify!($name), value)
                })
            }

            fn value(&self) -> $crate::error::Result<&$crate::ascii::AsciiString> {
                self.0
                    .as_ref()
                    .ok_or_else(|| $crate::error::ValueError::uninitialized(stringify!($name)))
            }
        }

        impl $crate::value::ComparableValue for $name {}

        impl $crate::value::SpanSerializable for $name {
            const MAX_SERIALIZED_CHAR_LENGTH: usize = $max;
            const MAX_SERIALIZED_BYTE_LENGTH: usize = $max;

            fn try_format(&self, destination: &mut [u8]) -> $crate::error::Result<usize> {
                $crate::value::write_str(self.as_str()?, destination)
            }

            fn parse(s: &str) -> $crate::error::Result<Self> {
                let invalid = || $crate::error::ValueError::format(stringify!($name), s);
                if !$fold {
                    return Self::lookup(s).ok_or_else(invalid);
                }
                // Longer input cannot be a member; lowercase the rest on the stack
                let bytes = s.as_bytes();
                if bytes.len() > $max {
                    return ::std::result::Result::Err(invalid());
                }
                let mut buffer = [0u8; $max];
                let lowered = &mut buffer[..bytes.len()];
                lowered.copy_from_slice(bytes);
                lowered.make_ascii_lowercase();
                let text = ::std::str::from_utf8(lowered).map_err(|_| invalid())?;
                Self::lookup(text).ok_or_else(invalid)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match &self.0 {
                    ::std::option::Option::Some(text) => {
                        write!(f, "{}({:?})", stringify!($name), text)
                    }
                    ::std::option::Option::None => {
                        write!(f, "{}(<uninitialized>)", stringify!($name))
                    }
                }
            }
        }

        $crate::impl_text_boundary!($name);
        $crate::impl_serde_as_text!($name);
    };
}
