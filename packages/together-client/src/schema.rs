//! Type-safe schema generation for structured outputs.
//!
//! Uses the `schemars` crate to generate JSON schemas from Rust types, then
//! rewrites them into the strict form the chat-completions `json_schema`
//! response format expects.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use together_client::StructuredOutput;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Insight {
//!     title: String,
//!     description: String,
//! }
//!
//! let schema = Insight::strict_schema();
//! ```

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Trait for types that can be requested as structured model output.
///
/// Automatically implemented for any type that implements
/// `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a strict-mode JSON schema for this type.
    ///
    /// Strict mode requires:
    /// 1. `additionalProperties: false` on every object schema
    /// 2. ALL properties listed in `required`, even nullable ones
    /// 3. Fully inlined schemas (no `$ref` references)
    fn strict_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        strictify_objects(&mut value);
        inline_refs(&mut value);

        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Rewrite every object schema for strict-mode compatibility: add
/// `additionalProperties: false` and put all properties in `required`.
fn strictify_objects(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if map.get("type") == Some(&serde_json::Value::String("object".to_string())) {
                map.insert(
                    "additionalProperties".to_string(),
                    serde_json::Value::Bool(false),
                );

                if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                    let all_keys: Vec<serde_json::Value> = props
                        .keys()
                        .map(|k| serde_json::Value::String(k.clone()))
                        .collect();
                    map.insert("required".to_string(), serde_json::Value::Array(all_keys));
                }
            }

            for (_, v) in map.iter_mut() {
                strictify_objects(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                strictify_objects(item);
            }
        }
        _ => {}
    }
}

/// Inline all `$ref` references using the schema's definitions section.
///
/// Strict-mode validators do not reliably follow refs, so nested types are
/// expanded in place.
fn inline_refs(value: &mut serde_json::Value) {
    let definitions = if let serde_json::Value::Object(map) = value {
        map.get("definitions").cloned()
    } else {
        None
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

fn inline_refs_recursive(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                if let Some(type_name) = ref_path.strip_prefix("#/definitions/") {
                    if let Some(def) = definitions.get(type_name) {
                        *value = def.clone();
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct TestInsight {
        title: String,
        description: Option<String>,
    }

    #[derive(Deserialize, JsonSchema)]
    struct TestBatch {
        insights: Vec<TestInsight>,
    }

    #[test]
    fn test_all_properties_required() {
        // Strict mode requires ALL properties in required, even Option<T> fields
        let schema = TestInsight::strict_schema();
        let obj = schema.as_object().unwrap();

        assert_eq!(
            obj.get("additionalProperties"),
            Some(&serde_json::Value::Bool(false))
        );

        let required: Vec<&str> = obj
            .get("required")
            .expect("should have required array")
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        assert!(required.contains(&"title"));
        assert!(required.contains(&"description"));
    }

    #[test]
    fn test_nested_types_inlined() {
        let schema = TestBatch::strict_schema();
        let obj = schema.as_object().unwrap();

        assert!(
            !obj.contains_key("definitions"),
            "refs should be inlined, not left in definitions"
        );
        assert!(!obj.contains_key("$schema"));

        let schema_str = serde_json::to_string(&schema).unwrap();
        assert!(
            !schema_str.contains("$ref"),
            "no $ref should survive inlining: {}",
            schema_str
        );
        // The nested object's fields must appear inline
        assert!(schema_str.contains("title"));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(TestInsight::type_name(), "TestInsight");
    }
}
