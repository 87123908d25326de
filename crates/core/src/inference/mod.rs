//! Type inference for sample JSON values
//!
//! This module maps one sample JSON value onto a pair of types: one in the
//! generated backend vocabulary and one in the generated frontend
//! vocabulary. Both halves are produced together so they never drift apart.
//!
//! ## Rules
//!
//! - **Strings** - date/time literals become `DateTime`/`Date`, canonical
//!   UUIDs become `Guid`/`string`, everything else `string`/`string`
//! - **Numbers** - `int`, `long` or `decimal` depending on range and fraction
//! - **Null** - an optional string
//! - **Arrays** - a list of the first element's type (`List<object>`/`any[]` when empty)
//! - **Objects** - an untyped string-keyed map; nested fields are never inspected
//!
//! ## Example
//!
//! ```rust
//! use entity_scaffold_core::inference::infer_type;
//! use serde_json::json;
//!
//! let tags = infer_type(&json!(["a", "b"]));
//! assert_eq!(tags.backend.type_name(), "List<string>");
//! assert_eq!(tags.frontend.type_name(), "string[]");
//! ```

mod config;
mod formats;
mod inferrer;
mod types;

pub use config::{InferenceConfig, InferenceConfigBuilder, MAX_DISPLAY_PROPERTIES};
pub use formats::{Format, detect_format};
pub use inferrer::{TypeInferrer, infer_type, value_type_name};
pub use types::{BackendType, FrontendType, TypeDescriptor};
