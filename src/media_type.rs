//! Media type values: construction, parsing and canonical serialization.
//!
//! Implements the RFC 6838 `type/subtype+suffix; name=value` syntax.

use crate::error::{Error, Result};
use crate::grammar::{is_restricted_name, HEAD, MEDIA_TYPE, SEPARATOR};
use crate::parameter::Parameter;
use crate::top_level::TopLevel;
use std::fmt;
use std::str::FromStr;

/// An immutable, validated media type.
///
/// Parameters keep their order and duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    top_level: TopLevel,
    sub_type: String,
    suffix: String,
    parameters: Vec<Parameter>,
}

impl MediaType {
    /// Builds a media type from its components.
    ///
    /// An empty `suffix` means the media type has no suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_type::{MediaType, Parameter};
    ///
    /// let media_type = MediaType::new(
    ///     "application",
    ///     "json",
    ///     "whatever",
    ///     vec![Parameter::new("charset", "UTF-8").unwrap()],
    /// )
    /// .unwrap();
    /// assert_eq!(media_type.to_string(), "application/json+whatever; charset=UTF-8");
    /// ```
    pub fn new(
        top_level: &str,
        sub_type: impl Into<String>,
        suffix: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Result<Self> {
        let top_level = top_level.parse::<TopLevel>()?;

        let sub_type = sub_type.into();
        if !is_restricted_name(&sub_type) {
            return Err(Error::InvalidFormat(sub_type));
        }

        let suffix = suffix.into();
        if !suffix.is_empty() && !is_restricted_name(&suffix) {
            return Err(Error::InvalidFormat(suffix));
        }

        Ok(Self {
            top_level,
            sub_type,
            suffix,
            parameters: parameters.into_iter().collect(),
        })
    }

    /// Parses a media type, failing on any invalid input.
    ///
    /// Parameters may be separated by `;` or `,`, each optionally followed by
    /// a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// let media_type = MediaType::parse("application/vnd.api+json; charset=UTF-8").unwrap();
    /// assert_eq!(media_type.top_level(), "application");
    /// assert_eq!(media_type.sub_type(), "vnd.api");
    /// assert_eq!(media_type.suffix(), "json");
    /// assert_eq!(media_type.parameters()[0].value(), "UTF-8");
    ///
    /// assert!(MediaType::parse("unknown/json").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if !MEDIA_TYPE.is_match(input) {
            return Err(Error::InvalidMediaType(input.to_string()));
        }

        let mut fragments = SEPARATOR.split(input);
        let head = fragments.next().unwrap_or_default();
        let captures = HEAD
            .captures(head)
            .ok_or_else(|| Error::InvalidMediaType(input.to_string()))?;

        let top_level = captures.name("top_level").map_or("", |m| m.as_str());
        let sub_type = captures.name("sub_type").map_or("", |m| m.as_str());
        let suffix = captures.name("suffix").map_or("", |m| m.as_str());

        let parameters = fragments
            .map(Parameter::parse)
            .collect::<Result<Vec<_>>>()?;

        Self::new(top_level, sub_type, suffix, parameters)
    }

    /// Parses a media type, returning `None` on any invalid input.
    ///
    /// Use [`MediaType::parse`] when the reason for the failure matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use media_type::MediaType;
    ///
    /// assert!(MediaType::maybe("text/html").is_some());
    /// assert!(MediaType::maybe("text").is_none());
    /// ```
    pub fn maybe(input: &str) -> Option<Self> {
        match Self::parse(input) {
            Ok(media_type) => Some(media_type),
            Err(err) => {
                tracing::trace!(error = %err, "discarding unparsable media type");
                None
            }
        }
    }

    /// Returns `application/octet-stream`, the media type of unknown content.
    pub fn null() -> Self {
        Self {
            top_level: TopLevel::Application,
            sub_type: "octet-stream".to_string(),
            suffix: String::new(),
            parameters: Vec::new(),
        }
    }

    /// Lists the allowed top-level types, in declaration order.
    pub fn top_levels() -> &'static [TopLevel] {
        &TopLevel::ALL
    }

    /// Returns the top-level type token.
    pub fn top_level(&self) -> &str {
        self.top_level.as_str()
    }

    /// Returns the top-level type as an enum value.
    pub fn top_level_type(&self) -> TopLevel {
        self.top_level
    }

    /// Returns the subtype.
    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    /// Returns the suffix, or an empty string when there is none.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the parameters, in their original order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl Default for MediaType {
    fn default() -> Self {
        Self::null()
    }
}

/// Serializes in canonical form: parameters are always joined with `", "`.
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.top_level, self.sub_type)?;

        if !self.suffix.is_empty() {
            write!(f, "+{}", self.suffix)?;
        }

        for (i, parameter) in self.parameters.iter().enumerate() {
            f.write_str(if i == 0 { "; " } else { ", " })?;
            write!(f, "{parameter}")?;
        }

        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
