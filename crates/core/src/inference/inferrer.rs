//! Type inference for sample JSON values

use serde_json::{Number, Value};

use super::config::InferenceConfig;
use super::formats::{Format, detect_format};
use super::types::{BackendType, FrontendType, TypeDescriptor};

/// Maps sample JSON values onto backend/frontend type pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeInferrer {
    config: InferenceConfig,
}

impl TypeInferrer {
    /// Create a new inferrer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer the type pair of a JSON value
    ///
    /// Arrays are typed by their first element only, and objects are never
    /// inspected: they always map to an untyped string-keyed map.
    pub fn infer(&self, value: &Value) -> TypeDescriptor {
        match value {
            Value::String(s) => self.infer_string(s),
            Value::Number(n) => infer_number(n),
            Value::Bool(_) => TypeDescriptor::new(BackendType::Boolean, FrontendType::Boolean),
            Value::Null => TypeDescriptor::new(
                BackendType::Optional(Box::new(BackendType::String)),
                FrontendType::String,
            ),
            Value::Array(items) => match items.first() {
                Some(first) => TypeDescriptor::list_of(self.infer(first)),
                None => TypeDescriptor::list_of(TypeDescriptor::new(
                    BackendType::Any,
                    FrontendType::Any,
                )),
            },
            Value::Object(_) => TypeDescriptor::new(BackendType::ObjectMap, FrontendType::ObjectMap),
        }
    }

    fn infer_string(&self, s: &str) -> TypeDescriptor {
        if s.is_empty() || !self.config.detect_formats {
            return TypeDescriptor::string();
        }

        match detect_format(s) {
            Format::DateTime | Format::Date => {
                TypeDescriptor::new(BackendType::DateTime, FrontendType::Date)
            }
            // The frontend has no identifier primitive
            Format::Uuid => TypeDescriptor::new(BackendType::Uuid, FrontendType::String),
            Format::None => TypeDescriptor::string(),
        }
    }
}

/// Infer the type pair of a JSON value with the default configuration
pub fn infer_type(value: &Value) -> TypeDescriptor {
    TypeInferrer::new().infer(value)
}

fn infer_number(n: &Number) -> TypeDescriptor {
    let backend = if let Some(i) = n.as_i64() {
        if i32::try_from(i).is_ok() {
            BackendType::Integer
        } else {
            BackendType::WideInteger
        }
    } else if let Some(f) = n.as_f64().filter(|f| f.is_finite()) {
        if f.fract() != 0.0 {
            BackendType::Decimal
        } else if f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
            BackendType::Integer
        } else if f >= i64::MIN as f64 && f < i64::MAX as f64 {
            BackendType::WideInteger
        } else {
            BackendType::Integer
        }
    } else {
        // u64 above i64::MAX
        BackendType::Integer
    };

    TypeDescriptor::new(backend, FrontendType::Number)
}

/// JSON type name of a value, used in diagnostics
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
