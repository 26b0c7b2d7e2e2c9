//! Macros for declaring physical state dimensions.

/// Generate a state dimension enum together with its `Dimension`
/// implementation, `Display` and `FromStr`.
///
/// Each variant carries its lowercase wire label. Opposite pairs are listed
/// once and resolve in both directions; variants left out of every pair have
/// no polarity.
///
/// # Example
///
/// ```
/// use wzrdbrain::dimension_enum;
/// use wzrdbrain::core::Dimension;
///
/// dimension_enum! {
///     pub enum Lean: "lean" {
///         Forward => "forward",
///         Backward => "backward",
///         Upright => "upright",
///     }
///     opposite: [(Forward, Backward)]
/// }
///
/// assert_eq!(Lean::Forward.opposite(), Some(Lean::Backward));
/// assert_eq!(Lean::Upright.opposite(), None);
/// assert_eq!("upright".parse::<Lean>().unwrap(), Lean::Upright);
/// ```
#[macro_export]
macro_rules! dimension_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }

        $(opposite: [$(($a:ident, $b:ident)),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Dimension for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            #[allow(unreachable_patterns)]
            fn opposite(&self) -> Option<Self> {
                match self {
                    $($(
                        Self::$a => Some(Self::$b),
                        Self::$b => Some(Self::$a),
                    )*)?
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::core::Dimension::name(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::core::ParseDimensionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::core::Dimension>::parse(s).ok_or_else(|| {
                    $crate::core::ParseDimensionError {
                        kind: $kind,
                        value: s.to_string(),
                    }
                })
            }
        }
    };
}
