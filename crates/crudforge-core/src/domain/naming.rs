//! Identifier case conversion.
//!
//! Every generator derives file names, type names, table names and route
//! paths from these three converters, so they must agree on what a "word"
//! is. All three go through [`words`].
//!
//! ## Word boundaries
//!
//! | Boundary | Example |
//! |----------|---------|
//! | whitespace, `_`, `-` | `centro custo` → `centro`, `custo` |
//! | lowercase → uppercase | `centroCusto` → `centro`, `Custo` |
//! | end of an uppercase run | `HTTPServer` → `HTTP`, `Server` |
//! | letter ↔ digit | `pedido2` → `pedido`, `2` |
//!
//! Pascal and camel output keeps an `_` between two words that would
//! otherwise fuse (`a b` → `A_B`, `nota 1 2` → `Nota1_2`), so
//! `snake(pascal(snake(x))) == snake(x)` holds for every input.

/// Convert to PascalCase: `centro custo` → `CentroCusto`.
///
/// Only the first letter of each word is touched, so an already-Pascal
/// input such as `CentroCusto` passes through unchanged.
pub fn to_pascal_case(input: &str) -> String {
    join_words(words(input).into_iter().map(capitalize).collect())
}

/// Convert to camelCase: `Centro Custo` → `centroCusto`.
pub fn to_camel_case(input: &str) -> String {
    let parts = words(input)
        .into_iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { decapitalize(word) } else { capitalize(word) })
        .collect();
    join_words(parts)
}

/// Convert to snake_case: `CentroCusto` → `centro_custo`, `Pedido2` → `pedido_2`.
pub fn to_snake_case(input: &str) -> String {
    words(input)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Split into words on separators and on case and digit boundaries.
fn words(input: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for token in input.split(is_separator).filter(|t| !t.is_empty()) {
        split_token(token, &mut out);
    }
    out
}

fn split_token<'a>(token: &'a str, out: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = token.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let (at, c) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);

        let digit_edge = prev.is_ascii_digit() != c.is_ascii_digit();
        let camel_edge = prev.is_lowercase() && c.is_uppercase();
        let acronym_end =
            prev.is_uppercase() && c.is_uppercase() && next.is_some_and(|n| n.is_lowercase());

        if digit_edge || camel_edge || acronym_end {
            out.push(&token[start..at]);
            start = at;
        }
    }
    out.push(&token[start..]);
}

/// Concatenate words, keeping `_` where two of them would fuse.
fn join_words(parts: Vec<String>) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 && fuses(&parts[i - 1], part) {
            out.push('_');
        }
        out.push_str(part);
    }
    out
}

fn fuses(left: &str, right: &str) -> bool {
    let joined = format!("{left}{right}");
    words(&joined).len() != words(left).len() + words(right).len()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first letter, or the whole word for an acronym (`HTTP`).
fn decapitalize(word: &str) -> String {
    if !word.chars().any(char::is_lowercase) {
        return word.to_lowercase();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
