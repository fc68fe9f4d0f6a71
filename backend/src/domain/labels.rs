//! Closed string-labelled enums shared by the domain and storage.
//!
//! Roles, statuses and categories are stored as TEXT guarded by CHECK
//! constraints. [`define_label_enum!`] generates the enum together with its
//! canonical label, `Display`, `FromStr` and serde representation so the
//! labels are spelled once.

/// Error returned when a stored or submitted label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownLabel {
    kind: &'static str,
    value: String,
}

impl UnknownLabel {
    /// Build an error for `kind` with the rejected `value`.
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

macro_rules! define_label_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident as $kind:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::utoipa::ToSchema,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Canonical storage label.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::labels::UnknownLabel;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok(Self::$variant),)*
                    other => Err($crate::domain::labels::UnknownLabel::new($kind, other)),
                }
            }
        }
    };
}

pub(crate) use define_label_enum;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_label_enum! {
        /// Example enum for macro coverage.
        pub enum Shade as "shade" {
            Light => "light",
            Dark => "Dark",
        }
    }

    #[rstest]
    #[case(Shade::Light, "light")]
    #[case(Shade::Dark, "Dark")]
    fn labels_round_trip(#[case] shade: Shade, #[case] label: &str) {
        assert_eq!(shade.as_str(), label);
        assert_eq!(shade.to_string(), label);
        assert_eq!(label.parse::<Shade>(), Ok(shade));
        assert_eq!(
            serde_json::to_value(shade).expect("serialise"),
            serde_json::json!(label)
        );
    }

    #[rstest]
    fn rejects_unknown_and_case_mismatched_labels() {
        let err = "dark".parse::<Shade>().expect_err("labels are case sensitive");
        assert_eq!(err.value(), "dark");
        assert_eq!(err.to_string(), "unknown shade 'dark'");
    }

    #[rstest]
    fn all_lists_variants_in_order() {
        assert_eq!(Shade::ALL, &[Shade::Light, Shade::Dark]);
    }
}
