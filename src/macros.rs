//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for enums
///
/// Parsing is case-insensitive; each variant may list extra aliases after
/// its canonical string.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::error::MarqueeError;
///
/// enum_display_fromstr!(
///     MyEnum,
///     MarqueeError::InvalidMyEnum,
///     {
///         Variant1 => "variant1",
///         Variant2 => "variant2" | "v2",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_variant:path,
        { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::MarqueeError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let lower = s.trim().to_lowercase();
                $(
                    if lower == $str.to_lowercase() $(|| lower == $alias)* {
                        return Ok($enum_name::$variant);
                    }
                )+
                Err($error_variant(s.to_string()))
            }
        }
    };
}
