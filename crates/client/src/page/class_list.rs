//! `class` attribute token handling.

/// Whether a class attribute value contains `class` as a whole token.
pub fn contains(attr: Option<&str>, class: &str) -> bool {
    attr.is_some_and(|value| value.split_ascii_whitespace().any(|token| token == class))
}

/// New class attribute value with `class` present or absent.
///
/// Other tokens keep their order; duplicates of `class` collapse. Returns
/// `None` when no tokens remain, meaning the attribute should be removed.
pub fn with_class(attr: Option<&str>, class: &str, present: bool) -> Option<String> {
    let mut tokens: Vec<&str> = attr.unwrap_or_default().split_ascii_whitespace().filter(|t| *t != class).collect();

    if present {
        tokens.push(class);
    }

    if tokens.is_empty() { None } else { Some(tokens.join(" ")) }
}
