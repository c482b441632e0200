//! Grammar validation helpers for media type tokens.
//!
//! Based on the RFC 6838 section 4.2 `restricted-name` definition and the
//! RFC 9110 `token` character set for parameter values.

use crate::top_level::TopLevel;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a restricted name, first character included.
pub const MAX_RESTRICTED_NAME_LEN: usize = 127;

/// Pattern for a single restricted name (unanchored).
pub(crate) const RESTRICTED_NAME: &str = r"[A-Za-z0-9][A-Za-z0-9!#$&\^_.\-]{0,126}";

/// Pattern for a single parameter value character (unanchored).
const VALUE_CHAR: &str = r"[A-Za-z0-9!#$%&'*+\^_.`|~\-]";

/// Whole-string grammar: `type "/" subtype ("+" suffix)? (("," | ";") " "? parameter)*`.
pub(crate) static MEDIA_TYPE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r#"^(?:{top})/{name}(?:\+{name})?(?:[,;] ?{name}=(?:{value}+|"{value}*"))*$"#,
        top = top_level_alternation(),
        name = RESTRICTED_NAME,
        value = VALUE_CHAR,
    ))
});

/// Head decomposition: `type "/" subtype ("+" suffix)?` with named captures.
pub(crate) static HEAD: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"^(?P<top_level>{top})/(?P<sub_type>{name})(?:\+(?P<suffix>{name}))?$",
        top = top_level_alternation(),
        name = RESTRICTED_NAME,
    ))
});

/// Separator between the head and each parameter.
pub(crate) static SEPARATOR: Lazy<Regex> = Lazy::new(|| compile(r"[;,] ?"));

/// Unquoted parameter: `name "=" token`.
pub(crate) static TOKEN_PARAMETER: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"^(?P<name>{name})=(?P<value>{value}+)$",
        name = RESTRICTED_NAME,
        value = VALUE_CHAR,
    ))
});

/// Quoted parameter: `name "=" <"> token-char* <">`.
pub(crate) static QUOTED_PARAMETER: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r#"^(?P<name>{name})="(?P<value>{value}*)"$"#,
        name = RESTRICTED_NAME,
        value = VALUE_CHAR,
    ))
});

fn top_level_alternation() -> String {
    TopLevel::ALL
        .iter()
        .map(TopLevel::as_str)
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("grammar patterns are constant and valid")
}

/// Reports whether the character may start a restricted name.
///
/// restricted-name-first := ALPHA / DIGIT
pub fn is_restricted_name_first(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Reports whether the character may follow the first one in a restricted name.
///
/// restricted-name-chars := ALPHA / DIGIT / "!" / "#" / "$" / "&" / "-" / "^" / "_" / "."
pub fn is_restricted_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '!' | '#' | '$' | '&' | '^' | '_' | '.' | '-')
}

/// Reports whether the string is a valid `restricted-name` as defined by RFC 6838.
///
/// A restricted name is 1 to 127 characters long.
pub fn is_restricted_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_restricted_name_first(first) => {}
        _ => return false,
    }

    // all accepted characters are ASCII, so byte length equals char count
    s.len() <= MAX_RESTRICTED_NAME_LEN && chars.all(is_restricted_name_char)
}

/// Reports whether the character is allowed in a parameter value.
///
/// tchar := "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
pub fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '^' | '_' | '.' | '`' | '|' | '~' | '-'
        )
}
