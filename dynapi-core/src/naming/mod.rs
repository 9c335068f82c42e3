//! Name derivation for synthesized operations.
//!
//! Every derived name is a pure function of the document, so two registration passes over the
//! same document produce the same names.

use std::sync::LazyLock;

use regex::Regex;

static NON_IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_]+").expect("valid regex"));

static WORD_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid regex"));

const HTTP_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

pub fn is_http_method(key: &str) -> bool {
    HTTP_METHODS.iter().any(|m| m.eq_ignore_ascii_case(key))
}

/// `get` + `/users/{id}` -> `GetUsersById`.
///
/// Slashes disappear and each segment is capitalized. `{` becomes `By` (capitalizing the
/// placeholder name) and `}` is dropped. Any other character that cannot appear in an
/// identifier becomes `_`, so `/users/by-id` (`GetUsersBy_id`) stays apart from `/users/{id}`.
pub fn endpoint_name(method: &str, path: &str) -> String {
    let mut out = capitalize(&method.to_ascii_lowercase());
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let mut upper_next = true;
        for c in segment.chars() {
            match c {
                '{' => {
                    out.push_str("By");
                    upper_next = true;
                }
                '}' => {}
                c if is_ident_char(c) => {
                    if upper_next {
                        out.extend(c.to_uppercase());
                    } else {
                        out.push(c);
                    }
                    upper_next = false;
                }
                _ => {
                    out.push('_');
                    upper_next = false;
                }
            }
        }
    }
    out
}

/// Drops whitespace and anything that cannot appear in an identifier: `Regres API` -> `RegresAPI`.
/// Letters and digits of any script are kept.
pub fn sanitize_identifier(text: &str) -> String {
    NON_IDENT_RE.replace_all(text, "").into_owned()
}

/// Splits identifiers into words for display: `GetUsersById` -> `Get users by id`,
/// `per_page` -> `Per page`. All-caps runs are kept as acronyms (`RegresAPI` -> `Regres API`).
pub fn humanize(text: &str) -> String {
    let words = split_words(text);
    let mut out = String::with_capacity(text.len() + words.len());
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let is_acronym = word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase());
        if is_acronym {
            out.push_str(word);
        } else if i == 0 {
            out.push_str(&capitalize(&word.to_lowercase()));
        } else {
            out.push_str(&word.to_lowercase());
        }
    }
    out
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in WORD_SPLIT_RE.split(text).filter(|c| !c.is_empty()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            if i > 0 && is_boundary(chars[i - 1], c, chars.get(i + 1).copied()) {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    if prev.is_lowercase() && cur.is_uppercase() {
        return true;
    }
    // `APIKey`: the boundary sits before the `K`.
    if prev.is_uppercase() && cur.is_uppercase() && next.is_some_and(char::is_lowercase) {
        return true;
    }
    prev.is_numeric() != cur.is_numeric()
}
