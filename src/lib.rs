//! Immutable RFC 6838 media type values.
//!
//! This crate provides:
//! - Validated construction of media types and parameters from components
//! - Strict (`Result`) and fallible (`Option`) parsing of
//!   `type/subtype+suffix; name=value` strings
//! - Canonical serialization through `Display`
//! - The closed set of registered top-level types
//!
//! ```
//! use media_type::MediaType;
//!
//! let media_type = MediaType::parse("application/vnd.api+json;charset=UTF-8,q=1").unwrap();
//! assert_eq!(media_type.to_string(), "application/vnd.api+json; charset=UTF-8, q=1");
//! ```

pub mod error;
pub mod grammar;
pub mod media_type;
pub mod parameter;
pub mod top_level;

#[cfg(feature = "proptest")]
pub mod strategy;

// Re-export commonly used types
pub use error::{Error, Result};
pub use grammar::is_restricted_name;
pub use media_type::MediaType;
pub use parameter::Parameter;
pub use top_level::TopLevel;
