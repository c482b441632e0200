//! `proptest` strategies producing arbitrary valid values.
//!
//! Enabled with the `proptest` feature.

use crate::grammar::MAX_RESTRICTED_NAME_LEN;
use crate::{MediaType, Parameter, TopLevel};
use proptest::prelude::*;
use proptest::sample::select;

/// Any valid restricted name, 1 to 127 characters long.
pub fn restricted_name() -> impl Strategy<Value = String> {
    let pattern = format!(
        "[A-Za-z0-9][A-Za-z0-9!#$&\\^_.\\-]{{0,{}}}",
        MAX_RESTRICTED_NAME_LEN - 1
    );
    proptest::string::string_regex(&pattern).expect("restricted name pattern is valid")
}

/// Any top-level type.
pub fn top_level() -> impl Strategy<Value = TopLevel> {
    select(TopLevel::ALL.to_vec())
}

/// Any parameter whose value is made of alphanumerics, `-` and `.`.
pub fn parameter() -> impl Strategy<Value = Parameter> {
    (restricted_name(), "[A-Za-z0-9.\\-]{1,100}").prop_map(|(name, value)| {
        Parameter::new(name, value).expect("generated name is a restricted name")
    })
}

/// Any media type with an optional suffix and at most one parameter.
pub fn media_type() -> impl Strategy<Value = MediaType> {
    (
        top_level(),
        restricted_name(),
        prop_oneof![Just(String::new()), restricted_name()],
        proptest::option::of(parameter()),
    )
        .prop_map(|(top_level, sub_type, suffix, parameter)| {
            MediaType::new(top_level.as_str(), sub_type, suffix, parameter)
                .expect("generated components are valid")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::is_restricted_name;

    proptest! {
        #[test]
        fn test_restricted_name_is_valid(name in restricted_name()) {
            prop_assert!(is_restricted_name(&name));
        }

        #[test]
        fn test_media_type_round_trips(media_type in media_type()) {
            let parsed = MediaType::parse(&media_type.to_string()).unwrap();
            prop_assert_eq!(parsed, media_type);
        }
    }
}
