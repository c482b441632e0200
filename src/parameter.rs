//! Media type parameters (`name=value`).

use crate::error::{Error, Result};
use crate::grammar::{is_restricted_name, QUOTED_PARAMETER, TOKEN_PARAMETER};
use regex::Captures;
use std::fmt;
use std::str::FromStr;

/// A single `name=value` parameter of a media type.
///
/// The name is always a valid restricted name. The value is trusted as given
/// when built with [`Parameter::new`]; [`Parameter::parse`] only accepts
/// values made of token characters, optionally wrapped in double quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Builds a parameter, validating only its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_type::Parameter;
    ///
    /// let parameter = Parameter::new("charset", "UTF-8").unwrap();
    /// assert_eq!(parameter.to_string(), "charset=UTF-8");
    /// assert!(Parameter::new("", "UTF-8").is_err());
    /// ```
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_restricted_name(&name) {
            return Err(Error::InvalidFormat(name));
        }

        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// Parses a single `name=value` or `name="value"` fragment.
    ///
    /// Surrounding quotes are stripped from the value. Since [`Display`]
    /// never adds them back, an empty quoted value (`name=""`) serializes as
    /// `name=`, which this function rejects.
    ///
    /// [`Display`]: fmt::Display
    ///
    /// # Examples
    ///
    /// ```
    /// use media_type::Parameter;
    ///
    /// let parameter = Parameter::parse("charset=\"UTF-8\"").unwrap();
    /// assert_eq!(parameter.name(), "charset");
    /// assert_eq!(parameter.value(), "UTF-8");
    /// ```
    pub fn parse(fragment: &str) -> Result<Self> {
        let captures = TOKEN_PARAMETER
            .captures(fragment)
            .or_else(|| QUOTED_PARAMETER.captures(fragment))
            .ok_or_else(|| Error::InvalidParameter(fragment.to_string()))?;

        Self::new(capture(&captures, "name"), capture(&captures, "value"))
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter value, without quotes.
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn capture<'h>(captures: &Captures<'h>, group: &str) -> &'h str {
    captures.name(group).map_or("", |m| m.as_str())
}

/// Serializes as `name=value`. Quotes are never added back.
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
