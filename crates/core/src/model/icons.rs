//! Icon tags for generated navigation entries

/// Tag used when no domain word matches
pub const FALLBACK_ICON: &str = "list";

/// Domain word (singular and plural, lowercase) to Material icon tag
const ICONS: &[(&str, &str)] = &[
    ("user", "person"),
    ("users", "person"),
    ("customer", "people"),
    ("customers", "people"),
    ("employee", "badge"),
    ("employees", "badge"),
    ("team", "groups"),
    ("teams", "groups"),
    ("product", "inventory"),
    ("products", "inventory"),
    ("order", "shopping_cart"),
    ("orders", "shopping_cart"),
    ("category", "category"),
    ("categories", "category"),
    ("invoice", "receipt"),
    ("invoices", "receipt"),
    ("payment", "payment"),
    ("payments", "payment"),
    ("task", "task"),
    ("tasks", "task"),
    ("todo", "task"),
    ("todos", "task"),
    ("project", "folder"),
    ("projects", "folder"),
    ("document", "description"),
    ("documents", "description"),
    ("event", "event"),
    ("events", "event"),
    ("message", "mail"),
    ("messages", "mail"),
    ("comment", "comment"),
    ("comments", "comment"),
    ("post", "article"),
    ("posts", "article"),
    ("book", "book"),
    ("books", "book"),
    ("company", "business"),
    ("companies", "business"),
    ("location", "place"),
    ("locations", "place"),
    ("address", "home"),
    ("addresses", "home"),
    ("image", "image"),
    ("images", "image"),
    ("report", "assessment"),
    ("reports", "assessment"),
    ("ticket", "confirmation_number"),
    ("tickets", "confirmation_number"),
    ("setting", "settings"),
    ("settings", "settings"),
];

/// Icon tag for an entity name, matched case-insensitively
pub fn icon_for(entity_name: &str) -> &'static str {
    let key = entity_name.to_lowercase();
    ICONS
        .iter()
        .find(|(word, _)| *word == key)
        .map_or(FALLBACK_ICON, |(_, icon)| *icon)
}
