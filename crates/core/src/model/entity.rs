//! Entity assembly: identity detection, type discriminators and derived views

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use super::icons::icon_for;
use super::property::Property;
use crate::inference::{InferenceConfig, TypeInferrer};
use crate::naming::{
    pluralize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, to_title_case,
};

/// Authored field name that marks a shared-container type discriminator
pub const TYPE_DISCRIMINATOR_FIELD: &str = "type";

/// Identity name reported when an entity has no identity property
pub const DEFAULT_IDENTITY_NAME: &str = "Id";

/// Authored property names (compared case-insensitively) eligible for list views
const DISPLAY_PROPERTY_NAMES: &[&str] = &["id", "version", "versionnumber", "name", "description"];

/// One modeled resource: a top-level key of the schema and its properties
///
/// Only `name`, `properties` and `use_type_discriminator` are stored; every
/// other view is derived on access.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    name: String,
    properties: Vec<Property>,
    use_type_discriminator: bool,
    #[serde(skip)]
    display_limit: usize,
}

impl Entity {
    /// Assemble an entity with the default configuration
    pub fn from_members<'a, K, I>(key: &str, members: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, &'a Value)>,
    {
        Self::from_members_with(key, members, &InferenceConfig::default())
    }

    /// Assemble an entity from its authored key and fields in document order
    pub fn from_members_with<'a, K, I>(key: &str, members: I, config: &InferenceConfig) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, &'a Value)>,
    {
        let name = to_pascal_case(key);
        let inferrer = TypeInferrer::with_config(*config);

        let mut properties: Vec<Property> = members
            .into_iter()
            .map(|(field, value)| Property::from_value_with(field.as_ref(), value, &inferrer))
            .collect();

        let use_type_discriminator = match properties
            .iter()
            .position(|p| p.has_name(TYPE_DISCRIMINATOR_FIELD))
        {
            Some(index) => {
                properties.remove(index);
                true
            }
            None => false,
        };

        let entity_identity = format!("{name}Id");
        let identity_index = properties
            .iter()
            .position(|p| p.has_name(&entity_identity))
            .or_else(|| properties.iter().position(|p| p.has_name("id")));

        match identity_index {
            Some(index) => {
                let authored = properties.remove(index);
                trace!(entity = %name, field = authored.name(), "using authored identity");
                properties.insert(index, authored.into_identity());
            }
            None => {
                trace!(entity = %name, "synthesizing identity property");
                properties.insert(0, Property::synthesized_identity());
            }
        }

        let entity = Self {
            name,
            properties,
            use_type_discriminator,
            display_limit: config.display_limit(),
        };

        debug!(
            entity = %entity.name,
            properties = entity.properties.len(),
            identity = entity.identity_property_name(),
            discriminator = entity.use_type_discriminator,
            "assembled entity"
        );

        entity
    }

    /// PascalCase name derived from the schema key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties in document order, identity included
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Whether the schema declared a `type` field
    pub fn use_type_discriminator(&self) -> bool {
        self.use_type_discriminator
    }

    /// Display property cap this entity was assembled with
    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    pub fn plural_name(&self) -> String {
        pluralize(&self.name)
    }

    pub fn camel_name(&self) -> String {
        to_camel_case(&self.name)
    }

    pub fn plural_camel_name(&self) -> String {
        to_camel_case(&self.plural_name())
    }

    pub fn kebab_name(&self) -> String {
        to_kebab_case(&self.name)
    }

    pub fn plural_kebab_name(&self) -> String {
        to_kebab_case(&self.plural_name())
    }

    pub fn snake_name(&self) -> String {
        to_snake_case(&self.name)
    }

    /// Human readable name: `OrderItem` -> `Order Item`
    pub fn display_name(&self) -> String {
        to_title_case(&self.name)
    }

    pub fn display_name_plural(&self) -> String {
        to_title_case(&self.plural_name())
    }

    /// First property flagged as identity
    pub fn identity_property(&self) -> Option<&Property> {
        self.properties.iter().find(|p| p.is_identity())
    }

    /// PascalCase name of the identity property, `Id` if there is none
    pub fn identity_property_name(&self) -> &str {
        self.identity_property()
            .map_or(DEFAULT_IDENTITY_NAME, Property::pascal_name)
    }

    pub fn non_identity_properties(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| !p.is_identity()).collect()
    }

    /// Properties suitable for a list view, in property order, at most five
    pub fn display_properties(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| DISPLAY_PROPERTY_NAMES.iter().any(|name| p.has_name(name)))
            .take(self.display_limit)
            .collect()
    }

    pub fn has_name_property(&self) -> bool {
        self.properties.iter().any(|p| p.has_name("name"))
    }

    pub fn has_description_property(&self) -> bool {
        self.properties.iter().any(|p| p.has_name("description"))
    }

    /// Navigation icon tag chosen from the entity name
    pub fn icon(&self) -> &'static str {
        icon_for(&self.name)
    }

    /// Snapshot of the stored fields and every derived view, for template binding
    pub fn summary(&self) -> EntitySummary {
        EntitySummary {
            name: self.name.clone(),
            plural_name: self.plural_name(),
            camel_name: self.camel_name(),
            plural_camel_name: self.plural_camel_name(),
            kebab_name: self.kebab_name(),
            plural_kebab_name: self.plural_kebab_name(),
            snake_name: self.snake_name(),
            display_name: self.display_name(),
            display_name_plural: self.display_name_plural(),
            identity_property_name: self.identity_property_name().to_string(),
            use_type_discriminator: self.use_type_discriminator,
            has_name_property: self.has_name_property(),
            has_description_property: self.has_description_property(),
            icon: self.icon().to_string(),
            properties: self.properties.clone(),
            non_identity_properties: self
                .non_identity_properties()
                .into_iter()
                .cloned()
                .collect(),
            display_properties: self.display_properties().into_iter().cloned().collect(),
        }
    }
}

/// Serializable view of an entity with all derived names resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub name: String,
    pub plural_name: String,
    pub camel_name: String,
    pub plural_camel_name: String,
    pub kebab_name: String,
    pub plural_kebab_name: String,
    pub snake_name: String,
    pub display_name: String,
    pub display_name_plural: String,
    pub identity_property_name: String,
    pub use_type_discriminator: bool,
    pub has_name_property: bool,
    pub has_description_property: bool,
    pub icon: String,
    pub properties: Vec<Property>,
    pub non_identity_properties: Vec<Property>,
    pub display_properties: Vec<Property>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{BackendType, FrontendType};
    use serde_json::{Map, json};

    fn entity(key: &str, body: Value) -> Entity {
        let members: Map<String, Value> = match body {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        };
        Entity::from_members(key, &members)
    }

    fn property_names(properties: &[&Property]) -> Vec<String> {
        properties.iter().map(|p| p.pascal_name().to_string()).collect()
    }

    #[test]
    fn test_synthesized_identity_is_prepended() {
        let product = entity("product", json!({"name": "Sample", "price": 99.99}));

        assert_eq!(product.name(), "Product");
        assert_eq!(product.properties().len(), 3);
        assert_eq!(product.properties()[0].pascal_name(), "Id");
        assert!(product.properties()[0].is_identity());
        assert_eq!(product.identity_property_name(), "Id");
        assert!(!product.use_type_discriminator());

        let price = &product.properties()[2];
        assert_eq!(price.pascal_name(), "Price");
        assert_eq!(price.backend_type(), &BackendType::Decimal);
        assert_eq!(price.frontend_type(), &FrontendType::Number);
    }

    #[test]
    fn test_entity_scoped_identity_wins() {
        let product = entity(
            "product",
            json!({"id": "x", "name": "Sample", "productId": 0}),
        );

        let identity = product.identity_property().unwrap();
        assert_eq!(identity.pascal_name(), "ProductId");
        assert!(identity.type_descriptor().is_string());
        assert_eq!(product.properties().len(), 3);
        assert_eq!(
            product.properties().iter().filter(|p| p.is_identity()).count(),
            1
        );
        // Identity keeps its position
        assert_eq!(product.properties()[2].pascal_name(), "ProductId");
    }

    #[test]
    fn test_plain_id_is_identity() {
        let order = entity("order", json!({"name": "A", "ID": 17}));
        let identity = order.identity_property().unwrap();
        assert_eq!(identity.name(), "ID");
        assert_eq!(identity.backend_type(), &BackendType::String);
        assert_eq!(identity.frontend_type(), &FrontendType::String);
        assert_eq!(order.properties()[0].pascal_name(), "Name");
    }

    #[test]
    fn test_identity_matches_snake_key() {
        let item = entity("order_item", json!({"orderItemId": "a", "qty": 1}));
        assert_eq!(item.name(), "OrderItem");
        assert_eq!(item.identity_property_name(), "OrderItemId");
    }

    #[test]
    fn test_type_discriminator_is_removed() {
        let product = entity("product", json!({"Type": "product", "name": "Sample"}));
        assert!(product.use_type_discriminator());
        assert!(product.properties().iter().all(|p| p.pascal_name() != "Type"));
        assert_eq!(product.properties().len(), 2);
    }

    #[test]
    fn test_display_properties() {
        let document = entity(
            "document",
            json!({
                "title": "t",
                "description": "d",
                "versionNumber": 3,
                "name": "n",
                "version_number": 4,
                "version": 1
            }),
        );

        assert_eq!(
            property_names(&document.display_properties()),
            vec!["Id", "Description", "VersionNumber", "Name", "Version"]
        );
        assert!(document.has_name_property());
        assert!(document.has_description_property());
    }

    #[test]
    fn test_display_matches_authored_names() {
        let label = entity(
            "label",
            json!({
                "labelId": "l1",
                "_name": "n",
                "display-name": "d",
                "version_number": 2,
                "Description": "x"
            }),
        );

        let display: Vec<&str> = label.display_properties().iter().map(|p| p.name()).collect();
        assert_eq!(display, vec!["Description"]);
        assert!(!label.has_name_property());
        assert!(label.has_description_property());
    }

    #[test]
    fn test_display_limit_from_config() {
        let config = InferenceConfig::builder().max_display_properties(2).build();
        let members = json!({"name": "n", "description": "d"});
        let tag = Entity::from_members_with("tag", members.as_object().unwrap(), &config);
        assert_eq!(tag.display_limit(), 2);
        assert_eq!(property_names(&tag.display_properties()), vec!["Id", "Name"]);
    }

    #[test]
    fn test_non_identity_properties() {
        let user = entity("user", json!({"email": "a@b.c", "userId": "u1"}));
        assert_eq!(
            property_names(&user.non_identity_properties()),
            vec!["Email"]
        );
        assert!(!user.has_name_property());
    }

    #[test]
    fn test_derived_names() {
        let category = entity("product_category", json!({}));
        assert_eq!(category.name(), "ProductCategory");
        assert_eq!(category.plural_name(), "ProductCategories");
        assert_eq!(category.camel_name(), "productCategory");
        assert_eq!(category.plural_camel_name(), "productCategories");
        assert_eq!(category.kebab_name(), "product-category");
        assert_eq!(category.plural_kebab_name(), "product-categories");
        assert_eq!(category.snake_name(), "product_category");
        assert_eq!(category.display_name(), "Product Category");
        assert_eq!(category.display_name_plural(), "Product Categories");
        assert_eq!(category.icon(), "list");
    }

    #[test]
    fn test_icon_from_name() {
        assert_eq!(entity("users", json!({})).icon(), "person");
        assert_eq!(entity("product", json!({})).icon(), "inventory");
    }

    #[test]
    fn test_summary_serialization() {
        let person = entity("person", json!({"name": "Ada", "tags": ["x"]}));
        let json = serde_json::to_value(person.summary()).unwrap();

        assert_eq!(json["name"], "Person");
        assert_eq!(json["pluralName"], "People");
        assert_eq!(json["pluralKebabName"], "people");
        assert_eq!(json["identityPropertyName"], "Id");
        assert_eq!(json["properties"][2]["backendType"], "List<string>");
        assert_eq!(json["nonIdentityProperties"].as_array().unwrap().len(), 2);
        assert_eq!(json["displayProperties"].as_array().unwrap().len(), 2);
    }
}
