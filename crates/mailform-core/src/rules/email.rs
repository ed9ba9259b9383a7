use regex::Regex;
use std::sync::LazyLock;

/// Characters a browser regex matches with `\s`. Differs from Rust's `\s` at U+0085 and U+FEFF.
const FORM_SPACE_CLASS: &str = r"\t\n\v\f\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Deliberately loose: one `@`, no whitespace, and a dot somewhere inside the domain.
/// Quoted local parts and other RFC 5322 forms are rejected.
pub static EMAIL_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{FORM_SPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE_REGEX.is_match(value)
}
