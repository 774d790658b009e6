//! Macro for implementing Display and FromStr for identifier enums
//!
//! Timetable text is matched case-sensitively, so unlike free-form status
//! strings the identifiers generated here must match exactly.
//!
//! # Example
//!
//! ```rust
//! use classcal_domain::impl_identifier_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Meridiem {
//!     Am,
//!     Pm,
//! }
//!
//! impl_identifier_conversions!(Meridiem {
//!     Am => "am",
//!     Pm => "pm",
//! });
//!
//! assert_eq!("pm".parse::<Meridiem>(), Ok(Meridiem::Pm));
//! assert!("PM".parse::<Meridiem>().is_err());
//! ```

/// Implements Display and FromStr traits for identifier enums
///
/// This macro generates:
/// - `identifier()`: the declared identifier for a variant
/// - Display trait: writes `identifier()`
/// - FromStr trait: accepts only the declared identifier (case-sensitive)
#[macro_export]
macro_rules! impl_identifier_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// The identifier for this variant, exactly as declared.
            pub fn identifier(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.identifier())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestSlot {
        Morning,
        Evening,
    }

    impl_identifier_conversions!(TestSlot {
        Morning => "MORNING",
        Evening => "EVENING",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestSlot::Morning.to_string(), "MORNING");
        assert_eq!(TestSlot::Evening.to_string(), "EVENING");
    }

    #[test]
    fn test_fromstr_exact() {
        assert_eq!(TestSlot::from_str("MORNING").unwrap(), TestSlot::Morning);
        assert_eq!(TestSlot::from_str("EVENING").unwrap(), TestSlot::Evening);
    }

    #[test]
    fn test_fromstr_is_case_sensitive() {
        assert!(TestSlot::from_str("morning").is_err());
        assert!(TestSlot::from_str("Evening").is_err());
    }

    #[test]
    fn test_identifier_matches_display_and_fromstr() {
        for slot in [TestSlot::Morning, TestSlot::Evening] {
            assert_eq!(slot.to_string(), slot.identifier());
            assert_eq!(TestSlot::from_str(slot.identifier()), Ok(slot));
        }
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestSlot::from_str("NIGHT");
        assert!(result.unwrap_err().contains("Invalid TestSlot: NIGHT"));
    }
}
