//! Elasticsearch mapping documents.
//!
//! These types only serialize. The JSON they produce is the body of an
//! Elasticsearch create-index request.
pub mod options;

pub use options::{FieldOptions, IndexOptions};

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// The Elasticsearch field types an Avro primitive can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EsType {
    Integer,
    Keyword,
    Binary,
    Boolean,
    Long,
    Float,
    Double,
}

impl EsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EsType::Integer => "integer",
            EsType::Keyword => "keyword",
            EsType::Binary => "binary",
            EsType::Boolean => "boolean",
            EsType::Long => "long",
            EsType::Float => "float",
            EsType::Double => "double",
        }
    }
}

impl fmt::Display for EsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{"type": ..., <options>}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafMapping {
    #[serde(rename = "type")]
    pub es_type: EsType,
    #[serde(flatten)]
    pub options: FieldOptions,
}

impl LeafMapping {
    pub fn new(es_type: EsType) -> Self {
        Self {
            es_type,
            options: FieldOptions::default(),
        }
    }
}

/// Field name to field definition, in declared order.
pub type Properties = IndexMap<String, FieldMapping>;

/// The result of translating a single schema node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Mapping {
    Leaf(LeafMapping),
    Properties(Properties),
}

/// A field definition: either a leaf or an object holding only `properties`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldMapping {
    Leaf(LeafMapping),
    Object { properties: Mapping },
}

impl FieldMapping {
    pub fn object(properties: Mapping) -> Self {
        FieldMapping::Object { properties }
    }
}

impl From<LeafMapping> for FieldMapping {
    fn from(leaf: LeafMapping) -> Self {
        FieldMapping::Leaf(leaf)
    }
}

/// Dynamic mapping mode. Avro schemas describe documents exactly, so the
/// only mode ever produced is `strict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dynamic {
    #[default]
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mappings {
    pub dynamic: Dynamic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Mapping>,
}

/// `{"mappings": {"dynamic": "strict", "properties": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexMapping {
    pub mappings: Mappings,
}

impl IndexMapping {
    pub fn new(properties: Option<Mapping>) -> Self {
        Self {
            mappings: Mappings {
                dynamic: Dynamic::Strict,
                properties,
            },
        }
    }

    pub fn properties(&self) -> Option<&Mapping> {
        self.mappings.properties.as_ref()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaf_serializes_type_before_options() {
        let keyword = LeafMapping {
            es_type: EsType::Keyword,
            options: FieldOptions::for_type(EsType::Keyword, 256),
        };
        assert_eq!(
            serde_json::to_string(&keyword).unwrap(),
            r#"{"type":"keyword","ignore_above":256,"norms":false,"index_options":"freqs"}"#
        );
        assert_eq!(
            serde_json::to_string(&LeafMapping::new(EsType::Long)).unwrap(),
            r#"{"type":"long"}"#
        );
    }

    #[test]
    fn object_carries_only_properties() {
        let mut props = Properties::new();
        props.insert("n".into(), LeafMapping::new(EsType::Integer).into());
        let object = FieldMapping::object(Mapping::Properties(props));
        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({"properties": {"n": {"type": "integer"}}})
        );
    }

    #[test]
    fn unmapped_root_omits_properties() {
        let doc = IndexMapping::new(None);
        assert_eq!(doc.to_json().unwrap(), r#"{"mappings":{"dynamic":"strict"}}"#);
    }
}
