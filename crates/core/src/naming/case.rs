//! Case conversion between identifier styles

/// Split an identifier into words.
///
/// Boundaries are whitespace and ASCII punctuation (underscore, hyphen,
/// dot, ...), any non-uppercase character followed by an uppercase letter,
/// and the last capital of an acronym run that is followed by a lowercase
/// letter (`XMLHttp` -> `XML`, `Http`). Combining marks, symbols and
/// letters without case stay inside their word. Characters inside a word
/// keep their original case.
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut start: Option<usize> = None;

    for (i, &(idx, c)) in chars.iter().enumerate() {
        if is_separator(c) {
            if let Some(begin) = start.take() {
                words.push(&s[begin..idx]);
            }
            continue;
        }

        let Some(begin) = start else {
            start = Some(idx);
            continue;
        };

        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);
        let lower_to_upper = !is_cased_upper(prev) && is_cased_upper(c);
        let acronym_end =
            is_cased_upper(prev) && is_cased_upper(c) && next.is_some_and(char::is_lowercase);

        if lower_to_upper || acronym_end {
            words.push(&s[begin..idx]);
            start = Some(idx);
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }

    words
}

/// Word separators: whitespace and ASCII punctuation
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

/// Uppercase letter that has a distinct lowercase form.
///
/// Letters such as `𝐀` report as uppercase but survive lowercasing, so they
/// never start a word.
pub(crate) fn is_cased_upper(c: char) -> bool {
    if !c.is_uppercase() {
        return false;
    }
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}

/// Uppercase the first character, leave the rest untouched
pub(crate) fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leave the rest untouched
pub(crate) fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_all_upper(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Two or more letters, every one an uppercase letter with a lowercase form
fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() > 1 && letters.into_iter().all(is_cased_upper)
}

/// Convert to PascalCase: `to_do`, `to-do`, `toDo` and `ToDo` all become `ToDo`
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).into_iter().map(upper_first).collect()
}

/// Convert to camelCase: `ProductId` -> `productId`, `XMLHttp` -> `xmlHttp`
///
/// A leading acronym is lowercased as a whole.
pub fn to_camel_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            if i > 0 {
                upper_first(word)
            } else if is_acronym(word) {
                word.to_lowercase()
            } else {
                lower_first(word)
            }
        })
        .collect()
}

/// Convert to kebab-case
pub fn to_kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

/// Convert to snake_case
pub fn to_snake_case(s: &str) -> String {
    join_lower(s, "_")
}

fn join_lower(s: &str, separator: &str) -> String {
    split_words(s)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Convert to Title Case: `createdAt` -> `Created At`
pub fn to_title_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert to sentence form: `createdAt` -> `Created at`.
///
/// All-caps words (acronyms) are kept as written.
pub fn humanize(s: &str) -> String {
    split_words(s)
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                upper_first(word)
            } else if is_all_upper(word) && word.chars().count() > 1 {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
