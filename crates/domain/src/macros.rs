//! Macro for implementing Display and FromStr for wire enums
//!
//! The gateway speaks in lowercase string tags (`receipt`, `nf_printout`,
//! `percent_discount`, ...). This macro keeps the Rust variant and its wire
//! string in one table so that URL paths, log fields and parsing agree.
//!
//! # Example
//!
//! ```rust
//! use novitus_domain::impl_wire_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PaperCut {
//!     Full,
//!     Partial,
//! }
//!
//! impl_wire_conversions!(PaperCut {
//!     Full => "full",
//!     Partial => "partial",
//! });
//!
//! assert_eq!(PaperCut::Partial.to_string(), "partial");
//! assert_eq!("FULL".parse::<PaperCut>(), Ok(PaperCut::Full));
//! ```

/// Implements `Display`, `FromStr` and `as_str` for wire enums
///
/// - `Display` writes the wire string exactly as given
/// - `FromStr` parses case-insensitively
/// - `as_str` returns the wire string as `&'static str`
#[macro_export]
macro_rules! impl_wire_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation used by the gateway.
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

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $(if s.eq_ignore_ascii_case($str) {
                    return Ok(Self::$variant);
                })+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Justification {
        Left,
        Center,
        Right,
    }

    impl_wire_conversions!(Justification {
        Left => "left",
        Center => "center",
        Right => "right",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(Justification::Left.to_string(), "left");
        assert_eq!(Justification::Center.as_str(), "center");
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(Justification::from_str("RiGhT").unwrap(), Justification::Right);
        assert_eq!(Justification::from_str("left").unwrap(), Justification::Left);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = Justification::from_str("justify");
        assert!(result.unwrap_err().contains("Invalid Justification: justify"));
        assert!(Justification::from_str("").is_err());
    }
}
