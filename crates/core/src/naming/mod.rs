//! Naming derivation for generated identifiers
//!
//! Pure string transforms used to turn authored JSON keys into the naming
//! variants generators need: PascalCase type names, camelCase members,
//! kebab-case routes, snake_case columns, plural collection names and
//! human readable labels.
//!
//! Every function is total: empty input yields empty output, and already
//! normalized input is returned unchanged.
//!
//! ## Example
//!
//! ```rust
//! use entity_scaffold_core::naming::{pluralize, to_kebab_case, to_pascal_case};
//!
//! assert_eq!(to_pascal_case("order_item"), "OrderItem");
//! assert_eq!(to_kebab_case(&pluralize("OrderCategory")), "order-categories");
//! ```

mod case;
mod plural;

use serde::{Deserialize, Serialize};

pub use case::{
    humanize, split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
    to_title_case,
};
pub use plural::{pluralize, singularize};

/// Every naming variant of one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameVariants {
    pub original: String,
    pub pascal: String,
    pub camel: String,
    pub kebab: String,
    pub snake: String,
    pub plural: String,
    pub singular: String,
    pub title: String,
    pub humanized: String,
}

impl NameVariants {
    /// Derive all variants of `s`
    pub fn new(s: &str) -> Self {
        Self {
            original: s.to_string(),
            pascal: to_pascal_case(s),
            camel: to_camel_case(s),
            kebab: to_kebab_case(s),
            snake: to_snake_case(s),
            plural: pluralize(s),
            singular: singularize(s),
            title: to_title_case(s),
            humanized: humanize(s),
        }
    }
}

impl From<Option<&str>> for NameVariants {
    /// Absent names derive the empty variants
    fn from(s: Option<&str>) -> Self {
        Self::new(s.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_variants() {
        let names = NameVariants::new("order_category");
        assert_eq!(names.pascal, "OrderCategory");
        assert_eq!(names.camel, "orderCategory");
        assert_eq!(names.kebab, "order-category");
        assert_eq!(names.snake, "order_category");
        assert_eq!(names.plural, "order_categories");
        assert_eq!(names.singular, "order_category");
        assert_eq!(names.title, "Order Category");
        assert_eq!(names.humanized, "Order category");
    }

    #[test]
    fn test_absent_name_is_empty() {
        let names = NameVariants::from(None);
        assert_eq!(names, NameVariants::new(""));
        assert_eq!(names.pascal, "");
        assert_eq!(names.plural, "");
    }
}
