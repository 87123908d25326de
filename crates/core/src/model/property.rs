//! Property records assembled from one authored JSON field

use serde::Serialize;
use serde_json::Value;

use crate::inference::{BackendType, FrontendType, TypeDescriptor, TypeInferrer};
use crate::naming::{to_camel_case, to_pascal_case};

/// Authored name of a synthesized identity property
pub const SYNTHESIZED_IDENTITY_NAME: &str = "id";

/// One field of an entity
///
/// Properties are immutable once assembled. Naming variants are always
/// derived from the authored name and the collection/object flags always
/// follow the backend type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    name: String,
    pascal_name: String,
    camel_name: String,
    backend_type: BackendType,
    frontend_type: FrontendType,
    is_nullable: bool,
    is_collection: bool,
    is_object: bool,
    is_identity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_value: Option<String>,
}

impl Property {
    /// Assemble a property from an authored field with the default configuration
    pub fn from_value(name: &str, value: &Value) -> Self {
        Self::from_value_with(name, value, &TypeInferrer::new())
    }

    /// Assemble a property from an authored field
    pub fn from_value_with(name: &str, value: &Value, inferrer: &TypeInferrer) -> Self {
        let descriptor = inferrer.infer(value);
        let sample_value = if inferrer.config().collect_samples {
            sample_of(value)
        } else {
            None
        };

        Self::build(name, descriptor, value.is_null(), false, sample_value)
    }

    /// The `Id` property added to entities without an authored identity field
    pub fn synthesized_identity() -> Self {
        Self::build(
            SYNTHESIZED_IDENTITY_NAME,
            TypeDescriptor::string(),
            false,
            true,
            None,
        )
    }

    fn build(
        name: &str,
        descriptor: TypeDescriptor,
        is_nullable: bool,
        is_identity: bool,
        sample_value: Option<String>,
    ) -> Self {
        let TypeDescriptor { backend, frontend } = descriptor;
        Self {
            name: name.to_string(),
            pascal_name: to_pascal_case(name),
            camel_name: to_camel_case(name),
            is_collection: backend.is_list(),
            is_object: backend.is_object_map(),
            backend_type: backend,
            frontend_type: frontend,
            is_nullable,
            is_identity,
            sample_value,
        }
    }

    /// Copy of this property designated as the entity's identity.
    ///
    /// Identity values are always textual, so both type halves become
    /// `string` whatever the sample looked like, and the type-derived flags
    /// are recomputed for the new type. The sample value is kept.
    pub fn into_identity(self) -> Self {
        Self::build(&self.name, TypeDescriptor::string(), false, true, self.sample_value)
    }

    /// Authored name, as written in the schema
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pascal_name(&self) -> &str {
        &self.pascal_name
    }

    pub fn camel_name(&self) -> &str {
        &self.camel_name
    }

    pub fn backend_type(&self) -> &BackendType {
        &self.backend_type
    }

    pub fn frontend_type(&self) -> &FrontendType {
        &self.frontend_type
    }

    /// Both type halves
    pub fn type_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::new(self.backend_type.clone(), self.frontend_type.clone())
    }

    /// True only when the authored sample was `null`
    pub fn is_nullable(&self) -> bool {
        self.is_nullable
    }

    pub fn is_collection(&self) -> bool {
        self.is_collection
    }

    pub fn is_object(&self) -> bool {
        self.is_object
    }

    pub fn is_identity(&self) -> bool {
        self.is_identity
    }

    /// Scalar sample rendered as text; absent for null, array and object samples
    pub fn sample_value(&self) -> Option<&str> {
        self.sample_value.as_deref()
    }

    /// Case-insensitive match against the authored name
    pub(crate) fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

fn sample_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
