use std::collections::HashSet;

/// Lowercase `text` and replace every character that is not an ASCII letter,
/// digit or space with a space. One character in, one character out.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == ' ' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Distinct whitespace-separated tokens of already normalized text
pub fn tokens(normalized: &str) -> HashSet<&str> {
    normalized.split_whitespace().collect()
}
