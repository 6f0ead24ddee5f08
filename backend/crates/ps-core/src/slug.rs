//! URL-safe identifiers derived from display names.
//!
//! The name is transliterated to ASCII first (`Проект` -> `Proekt`,
//! `Straße` -> `Strasse`), then lowercased. Commas used as digit group
//! separators are dropped (`1,000` -> `1000`) and every other character
//! outside `[a-z0-9]` acts as a word boundary. Words are joined by a single
//! hyphen and the result never starts or ends with one.
//!
//! Because the output only contains characters that map to themselves,
//! `slugify(&slugify(x)) == slugify(x)`.

use deunicode::deunicode;

const SEPARATOR: char = '-';

/// Convert a display name into a slug.
pub fn slugify(name: &str) -> String {
    let ascii: Vec<char> = deunicode(name).chars().collect();
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for (index, &c) in ascii.iter().enumerate() {
        if c == ',' && is_digit_group_separator(&ascii, index) {
            continue;
        }

        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

fn is_digit_group_separator(chars: &[char], index: usize) -> bool {
    index > 0
        && index + 1 < chars.len()
        && chars[index - 1].is_ascii_digit()
        && chars[index + 1].is_ascii_digit()
}
