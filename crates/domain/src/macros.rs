//! Macro for implementing wire-name conversions on closed enums
//!
//! Task priority, task status and summary periods all travel as fixed
//! lowercase strings (JSON bodies and query parameters). The macro keeps the
//! wire name, `Display` and `FromStr` in one mapping so they cannot drift.
//!
//! # Example
//!
//! ```rust
//! use tasktime_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shade {
//!     Light,
//!     Dark,
//! }
//!
//! impl_wire_name_conversions!(Shade {
//!     Light => "light",
//!     Dark => "dark",
//! });
//!
//! assert_eq!(Shade::Dark.as_str(), "dark");
//! assert_eq!("LIGHT".parse::<Shade>().unwrap(), Shade::Light);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for wire enums
///
/// Parsing is case-insensitive and treats `-` like `_`, so `in-progress`,
/// `In_Progress` and `in_progress` are the same value.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Name used on the wire.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().replace('-', "_").as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
