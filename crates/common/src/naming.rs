//! Naming-convention transforms applied to user supplied names

/// Package form of a service name
///
/// Only case-folds; multi-word identifiers are not segmented.
///
/// ```
/// use gtool_common::naming::package_name;
///
/// assert_eq!(package_name("Ping"), "ping");
/// assert_eq!(package_name("UserCenter"), "usercenter");
/// ```
pub fn package_name(s: &str) -> String {
    s.to_lowercase()
}

/// Title-case every word of `s`
///
/// The first character of each word is upper-cased and the rest of the word
/// lower-cased. A word is a run of alphanumeric characters or `_`; `.`, `'`
/// and `:` stay inside the word when alphanumerics sit on both sides, so
/// `foo.bar` is one word.
///
/// ```
/// use gtool_common::naming::title_case;
///
/// assert_eq!(title_case("ping"), "Ping");
/// assert_eq!(title_case("user_info"), "User_info");
/// assert_eq!(title_case("hello world"), "Hello World");
/// assert_eq!(title_case("foo.bar"), "Foo.bar");
/// ```
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_alphanumeric() || ch == '_' {
            if in_word {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
                in_word = true;
            }
        } else {
            let joins_word = matches!(ch, '.' | '\'' | ':')
                && in_word
                && chars.peek().is_some_and(|next| next.is_alphanumeric());
            result.push(ch);
            in_word = joins_word;
        }
    }

    result
}

/// Whether `s` is a snake_case identifier: `[a-z0-9_]`, starting with a letter
///
/// ```
/// use gtool_common::naming::is_snake_case;
///
/// assert!(is_snake_case("user_info"));
/// assert!(!is_snake_case("../user_info"));
/// ```
pub fn is_snake_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'),
        _ => false,
    }
}

/// Convert snake_case to CamelCase
///
/// Underscores are dropped and the character following each one is
/// upper-cased, as is the first character. Other characters are kept as-is.
///
/// ```
/// use gtool_common::naming::snake_to_camel;
///
/// assert_eq!(snake_to_camel("user_info"), "UserInfo");
/// ```
pub fn snake_to_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut next_upper = true;

    for ch in s.chars() {
        if ch == '_' {
            next_upper = true;
            continue;
        }
        if next_upper {
            result.extend(ch.to_uppercase());
            next_upper = false;
        } else {
            result.push(ch);
        }
    }

    result
}
