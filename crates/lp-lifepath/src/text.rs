//! Small string transforms used when embedding table text in prose.

use lp_dice::pick;
use rand::rngs::StdRng;

/// Lowercase the first character, leave the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize every space-separated word.
pub fn title_words(s: &str) -> String {
    s.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Drop a leading "A " / "An " / "The " article.
pub fn strip_article(s: &str) -> &str {
    for article in ["A ", "An ", "The ", "a ", "an ", "the "] {
        if let Some(rest) = s.strip_prefix(article) {
            return rest;
        }
    }
    s
}

/// Drop one trailing period.
pub fn trim_period(s: &str) -> &str {
    s.strip_suffix('.').unwrap_or(s)
}

/// Pick one non-empty option from a `/`-separated list.
///
/// Text without a slash is returned as is.
pub fn choose_slash_option(s: &str, rng: &mut StdRng) -> Option<String> {
    if !s.contains('/') {
        return Some(s.to_string());
    }
    let options: Vec<&str> = s
        .split('/')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();
    pick(&options, rng).map(|o| (*o).to_string())
}

/// Resolve each `/`-bearing word independently, keep other words.
pub fn choose_slash_words(s: &str, rng: &mut StdRng) -> String {
    s.split(' ')
        .map(|word| choose_slash_option(word, rng).unwrap_or_else(|| word.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
