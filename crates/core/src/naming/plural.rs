//! English pluralization and singularization
//!
//! Only the last word of an identifier is inflected, so `OrderItem` becomes
//! `OrderItems` and `SalesPerson` becomes `SalesPeople`. The case of the
//! inflected word is restored from the input.

use super::case::{is_separator, split_words, upper_first};

/// Irregular singular/plural pairs, lowercase
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("half", "halves"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("wolf", "wolves"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("datum", "data"),
    ("medium", "media"),
    ("criterion", "criteria"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("cactus", "cacti"),
    ("fungus", "fungi"),
    ("radius", "radii"),
    ("axis", "axes"),
    ("crisis", "crises"),
    ("basis", "bases"),
    ("thesis", "theses"),
    ("diagnosis", "diagnoses"),
    ("hypothesis", "hypotheses"),
    ("bus", "buses"),
    ("status", "statuses"),
    ("campus", "campuses"),
    ("virus", "viruses"),
    ("bonus", "bonuses"),
    ("alias", "aliases"),
    ("bias", "biases"),
    ("canvas", "canvases"),
    ("atlas", "atlases"),
    ("gas", "gases"),
    ("lens", "lenses"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("veto", "vetoes"),
    ("torpedo", "torpedoes"),
    ("movie", "movies"),
    ("cookie", "cookies"),
    ("tie", "ties"),
    ("shoe", "shoes"),
    ("quiz", "quizzes"),
];

/// Words with no distinct plural form, lowercase
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "chaos",
    "metadata",
    "software",
    "feedback",
];

/// Nouns ending in `-che`, whose plural only adds `-s`
const CHE_NOUNS: &[&str] = &[
    "ache",
    "headache",
    "toothache",
    "cache",
    "niche",
    "quiche",
    "cliche",
    "creche",
    "psyche",
    "avalanche",
    "moustache",
    "mustache",
    "microfiche",
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Pluralize an English noun: `Category` -> `Categories`, `Box` -> `Boxes`.
///
/// Words that already look plural are returned unchanged.
pub fn pluralize(s: &str) -> String {
    inflect(s, plural_of)
}

/// Singularize an English noun: `Categories` -> `Category`, `People` -> `Person`
pub fn singularize(s: &str) -> String {
    inflect(s, singular_of)
}

fn inflect(s: &str, rule: fn(&str) -> String) -> String {
    let Some(start) = last_word_start(s) else {
        return s.to_string();
    };
    let (prefix, word) = s.split_at(start);
    let lower = word.to_lowercase();
    let inflected = rule(&lower);
    format!("{prefix}{}", restore_case(word, &inflected))
}

/// Byte offset of the last word, or `None` when the input does not end in one
fn last_word_start(s: &str) -> Option<usize> {
    let last = s.chars().next_back()?;
    if is_separator(last) {
        return None;
    }
    split_words(s).last().map(|word| s.len() - word.len())
}

fn restore_case(original: &str, inflected: &str) -> String {
    let letters = original.chars().filter(|c| c.is_alphabetic()).count();
    if letters > 1 && !original.chars().any(char::is_lowercase) {
        return inflected.to_uppercase();
    }
    if original.chars().next().is_some_and(char::is_uppercase) {
        return upper_first(inflected);
    }
    inflected.to_string()
}

fn plural_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == word) || looks_plural(word) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("sis") {
        return format!("{stem}ses");
    }
    if word.ends_with('z') && !word.ends_with("zz") && preceded_by_vowel(word, 1) {
        return format!("{word}zes");
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.is_empty() && !preceded_by_vowel(word, 1) {
            return format!("{stem}ies");
        }
    }

    format!("{word}s")
}

fn singular_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return (*singular).to_string();
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == word) || !looks_plural(word) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("yses") {
        return format!("{stem}ysis");
    }
    if let Some(stem) = word.strip_suffix('s') {
        if CHE_NOUNS.contains(&stem) {
            return stem.to_string();
        }
    }
    // `-oes` plurals are all irregular; `toes` and `canoes` just drop the `s`
    for suffix in ["sses", "xes", "zzes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }

    word[..word.len() - 1].to_string()
}

/// Heuristic for regular plurals: ends in `s` but not in a singular
/// `-ss`, `-us` or `-is` ending
fn looks_plural(word: &str) -> bool {
    word.len() > 1
        && word.ends_with('s')
        && !["ss", "us", "is"].iter().any(|suffix| word.ends_with(suffix))
}

/// Whether the character `offset` places before the end is a vowel
fn preceded_by_vowel(word: &str, offset: usize) -> bool {
    word.chars()
        .rev()
        .nth(offset)
        .is_some_and(|c| VOWELS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_regular() {
        assert_eq!(pluralize("product"), "products");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("church"), "churches");
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("waltz"), "waltzes");
        assert_eq!(pluralize("analysis"), "analyses");
    }

    #[test]
    fn test_pluralize_sibilant_doubling() {
        assert_eq!(pluralize("quiz"), "quizzes");
        assert_eq!(pluralize("bus"), "buses");
        assert_eq!(pluralize("fez"), "fezzes");
    }

    #[test]
    fn test_pluralize_irregular() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("Person"), "People");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("mouse"), "mice");
        assert_eq!(pluralize("SalesPerson"), "SalesPeople");
        assert_eq!(pluralize("sheep"), "sheep");
    }

    #[test]
    fn test_pluralize_last_word_only() {
        assert_eq!(pluralize("OrderItem"), "OrderItems");
        assert_eq!(pluralize("order_category"), "order_categories");
        assert_eq!(pluralize("USER"), "USERS");
    }

    #[test]
    fn test_pluralize_already_plural() {
        assert_eq!(pluralize("products"), "products");
        assert_eq!(pluralize("Categories"), "Categories");
        assert_eq!(pluralize("people"), "people");
        assert_eq!(pluralize("quizzes"), "quizzes");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("products"), "product");
        assert_eq!(singularize("Categories"), "Category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("quizzes"), "quiz");
        assert_eq!(singularize("buses"), "bus");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("mice"), "mouse");
        assert_eq!(singularize("analyses"), "analysis");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("vetoes"), "veto");
    }

    #[test]
    fn test_oe_and_che_nouns() {
        assert_eq!(pluralize("toe"), "toes");
        assert_eq!(singularize("toes"), "toe");
        assert_eq!(singularize("canoes"), "canoe");
        assert_eq!(pluralize(&singularize("canoes")), "canoes");

        assert_eq!(pluralize("cache"), "caches");
        assert_eq!(singularize("caches"), "cache");
        assert_eq!(singularize("Niches"), "Niche");
        assert_eq!(singularize("headaches"), "headache");
        assert_eq!(singularize("churches"), "church");
        assert_eq!(singularize("beaches"), "beach");
    }

    #[test]
    fn test_last_word_of_acronym_identifier() {
        assert_eq!(pluralize("XMLFile"), "XMLFiles");
        assert_eq!(pluralize("apiKey"), "apiKeys");
    }

    #[test]
    fn test_singularize_already_singular() {
        assert_eq!(singularize("product"), "product");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize("person"), "person");
    }

    #[test]
    fn test_empty_and_trailing_separator() {
        assert_eq!(pluralize(""), "");
        assert_eq!(singularize(""), "");
        assert_eq!(pluralize("item_"), "item_");
    }
}
