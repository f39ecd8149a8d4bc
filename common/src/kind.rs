//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Generated enum is displayed as its variant name and parsed back from
/// exactly that name, so it doubles as a display enum for view models.
///
/// The calling crate must depend on [`strum`].
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube,
///
///         #[doc = "A sphere"]
///         Sphere,
///     }
/// }
///
/// assert_eq!(Kind::Cube.to_string(), "Cube");
/// assert_eq!("Sphere".parse::<Kind>(), Ok(Kind::Sphere));
/// assert!("sphere".parse::<Kind>().is_err());
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            $crate::private::strum::IntoStaticStr,
            Eq,
            Hash,
            PartialEq,
        )]
        #[doc = $doc]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant,
            )*
        }
    };
}

#[cfg(test)]
mod spec {
    define_kind! {
        #[doc = "Condition of a part."]
        enum Condition {
            #[doc = "Never used."]
            New,

            #[doc = "Used, but serviceable."]
            Used,
        }
    }

    #[test]
    fn displays_variant_name() {
        assert_eq!(Condition::New.to_string(), "New");
        assert_eq!(<&str>::from(Condition::Used), "Used");
    }

    #[test]
    fn parses_exact_variant_name_only() {
        assert_eq!("Used".parse::<Condition>(), Ok(Condition::Used));
        assert_eq!("New".parse::<Condition>(), Ok(Condition::New));
        assert!("used".parse::<Condition>().is_err());
        assert!("NEW".parse::<Condition>().is_err());
        assert!("refurbished".parse::<Condition>().is_err());
    }
}
