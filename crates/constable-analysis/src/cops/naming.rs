//! Identifier helpers shared by the naming cops.

/// Snake-case spelling of an identifier.
///
/// A word boundary sits before an uppercase letter that follows a lowercase
/// letter or digit, or that starts a new word after an acronym
/// (`HTTPServer` → `http_server`). Existing underscores are kept.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            out.push(c);
            continue;
        }
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        let boundary = match prev {
            Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
            Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
            _ => false,
        };
        if boundary && !out.ends_with('_') {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Split a trailing `?`, `!` or `=` off a method-style name.
pub fn split_suffix(name: &str) -> (&str, &str) {
    match name.char_indices().last() {
        Some((i, '?' | '!' | '=')) => name.split_at(i),
        _ => (name, ""),
    }
}

/// True if `name` begins with an ASCII letter.
pub fn starts_with_letter(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}
