//! Type vocabularies for generated backend and frontend code

use std::fmt;

use serde::{Serialize, Serializer};

/// Type in the generated backend language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BackendType {
    /// `string`
    String,
    /// 32-bit signed integer (`int`)
    Integer,
    /// 64-bit signed integer (`long`)
    WideInteger,
    /// Decimal with a fractional part (`decimal`)
    Decimal,
    /// `bool`
    Boolean,
    /// `DateTime`
    DateTime,
    /// Unique identifier (`Guid`)
    Uuid,
    /// Untyped string-keyed map (`Dictionary<string, object>`)
    ObjectMap,
    /// Anything (`object`)
    Any,
    /// `List<T>`
    List(Box<BackendType>),
    /// Explicitly optional value (`T?`)
    Optional(Box<BackendType>),
}

impl BackendType {
    /// Rendered type name used by templates
    pub fn type_name(&self) -> String {
        match self {
            BackendType::String => "string".to_string(),
            BackendType::Integer => "int".to_string(),
            BackendType::WideInteger => "long".to_string(),
            BackendType::Decimal => "decimal".to_string(),
            BackendType::Boolean => "bool".to_string(),
            BackendType::DateTime => "DateTime".to_string(),
            BackendType::Uuid => "Guid".to_string(),
            BackendType::ObjectMap => "Dictionary<string, object>".to_string(),
            BackendType::Any => "object".to_string(),
            BackendType::List(item) => format!("List<{}>", item.type_name()),
            BackendType::Optional(inner) => format!("{}?", inner.type_name()),
        }
    }

    /// Element type of a list
    pub fn item_type(&self) -> Option<&BackendType> {
        match self {
            BackendType::List(item) => Some(item),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, BackendType::List(_))
    }

    pub fn is_object_map(&self) -> bool {
        matches!(self, BackendType::ObjectMap)
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, BackendType::Optional(_))
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

impl Serialize for BackendType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.type_name())
    }
}

/// Type in the generated frontend language
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrontendType {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `Date`
    Date,
    /// `Record<string, any>`
    ObjectMap,
    /// `any`
    Any,
    /// `T[]`
    Array(Box<FrontendType>),
}

impl FrontendType {
    /// Rendered type name used by templates
    pub fn type_name(&self) -> String {
        match self {
            FrontendType::String => "string".to_string(),
            FrontendType::Number => "number".to_string(),
            FrontendType::Boolean => "boolean".to_string(),
            FrontendType::Date => "Date".to_string(),
            FrontendType::ObjectMap => "Record<string, any>".to_string(),
            FrontendType::Any => "any".to_string(),
            FrontendType::Array(item) => format!("{}[]", item.type_name()),
        }
    }

    /// Element type of an array
    pub fn item_type(&self) -> Option<&FrontendType> {
        match self {
            FrontendType::Array(item) => Some(item),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, FrontendType::Array(_))
    }
}

impl fmt::Display for FrontendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

impl Serialize for FrontendType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.type_name())
    }
}

/// Backend and frontend types inferred together from one value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub backend: BackendType,
    pub frontend: FrontendType,
}

impl TypeDescriptor {
    pub fn new(backend: BackendType, frontend: FrontendType) -> Self {
        Self { backend, frontend }
    }

    /// The plain string pair every identity property uses
    pub fn string() -> Self {
        Self::new(BackendType::String, FrontendType::String)
    }

    /// Wrap both halves in their list/array form
    pub fn list_of(item: TypeDescriptor) -> Self {
        Self::new(
            BackendType::List(Box::new(item.backend)),
            FrontendType::Array(Box::new(item.frontend)),
        )
    }

    /// Whether both halves are the string primitive
    pub fn is_string(&self) -> bool {
        self.backend == BackendType::String && self.frontend == FrontendType::String
    }
}
