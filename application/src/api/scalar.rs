//! GraphQL scalar definitions.

use std::{fmt, marker::PhantomData, str::FromStr};

use derive_more::{AsRef, Display, From, Into};
use juniper::{
    GraphQLScalar, GraphQLType, InputValue, ParseScalarResult,
    ParseScalarValue, ScalarToken, ScalarValue, Value,
};
use service::domain;

/// Helper type to use in `#[graphql(with = ..)]` attribute.
///
/// Uses [`FromStr`]/[`Display`] impls of `As` type to convert the target type
/// to/from GraphQL scalar.
///
/// Target type must implement [`TryFrom`] and [`AsRef`] for `As` type.
///
/// [`Display`]: fmt::Display
#[derive(Debug)]
pub struct Via<As>(PhantomData<As>);

impl<As> Via<As> {
    /// Convert the target type into scalar [`Value`] by using [`Display`] impl
    /// of `As` type.
    ///
    /// [`Display`]: fmt::Display
    pub fn to_output<T, S>(value: &T) -> Value<S>
    where
        As: fmt::Display,
        T: AsRef<As>,
        S: ScalarValue,
    {
        Value::from(value.as_ref().to_string())
    }

    /// Constructs the target type from scalar [`Value`] by using [`FromStr`]
    /// impl of `As` type.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the input value is not a string;
    /// - the input value cannot be parsed into `As` type;
    /// - the parsed value cannot be converted into the target type.
    pub fn from_input<T, S>(input: &InputValue<S>) -> Result<T, String>
    where
        As: FromStr + fmt::Display,
        As::Err: fmt::Display,
        T: TryFrom<As> + GraphQLType<S, TypeInfo = ()>,
        T::Error: fmt::Display,
        S: ScalarValue,
    {
        let name = T::name(&()).unwrap_or("scalar");
        let s = input.as_string_value().ok_or_else(|| {
            format!(
                "Cannot parse input scalar `{name}`: expected string input \
                 value, found: {input}",
            )
        })?;
        s.parse::<As>()
            .map_err(|e| {
                format!(
                    "Cannot parse input scalar `{name}` from \"{s}\" string: \
                     {e}",
                )
            })?
            .try_into()
            .map_err(|e| format!("Cannot parse input scalar `{name}`: {e}"))
    }

    /// Parse the provided [`ScalarToken`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be parsed as [`String`].
    pub fn parse_token<S: ScalarValue>(
        value: ScalarToken<'_>,
    ) -> ParseScalarResult<S> {
        <String as ParseScalarValue<S>>::from_str(value)
    }
}

/// Unique identifier of a content record.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "RecordId", with = Via::<domain::Id>)]
pub struct Id(domain::Id);

/// Human-readable URL path segment of a content record.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(with = Via::<domain::Slug>)]
pub struct Slug(domain::Slug);

/// Pre-formatted price of a listing, including its currency symbol.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(with = Via::<domain::listing::Price>)]
pub struct Price(domain::listing::Price);

#[cfg(test)]
mod spec {
    use juniper::{DefaultScalarValue, InputValue, Value};
    use service::domain;

    use super::{Slug, Via};

    #[test]
    fn outputs_display_form() {
        let slug = Slug::from(domain::Slug::new("cb750").unwrap());

        let out: Value<DefaultScalarValue> =
            Via::<domain::Slug>::to_output(&slug);

        assert_eq!(out, Value::scalar("cb750".to_owned()));
    }

    #[test]
    fn parses_input() {
        let ok: Result<Slug, _> = Via::<domain::Slug>::from_input(
            &InputValue::<DefaultScalarValue>::scalar("cb750".to_owned()),
        );
        let blank: Result<Slug, _> = Via::<domain::Slug>::from_input(
            &InputValue::<DefaultScalarValue>::scalar(" ".to_owned()),
        );
        let number: Result<Slug, _> = Via::<domain::Slug>::from_input(
            &InputValue::<DefaultScalarValue>::scalar(42),
        );

        assert_eq!(ok.unwrap().to_string(), "cb750");
        assert!(blank.is_err());
        assert!(number.is_err());
    }
}
