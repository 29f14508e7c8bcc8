use crate::avro::SchemaKind;
use crate::mapping::{EsType, FieldOptions, LeafMapping};

/// Elasticsearch type for an Avro primitive.
///
/// `None` for `null` and every complex kind.
pub fn es_type_for(kind: SchemaKind) -> Option<EsType> {
    let es_type = match kind {
        SchemaKind::Int => EsType::Integer,
        SchemaKind::String => EsType::Keyword,
        SchemaKind::Bytes => EsType::Binary,
        SchemaKind::Boolean => EsType::Boolean,
        SchemaKind::Long => EsType::Long,
        SchemaKind::Float => EsType::Float,
        SchemaKind::Double => EsType::Double,
        SchemaKind::Null
        | SchemaKind::Record
        | SchemaKind::Enum
        | SchemaKind::Array
        | SchemaKind::Map
        | SchemaKind::Union
        | SchemaKind::Fixed => return None,
    };
    Some(es_type)
}

/// Leaf mapping for an Avro primitive, with the type's fixed option set merged in.
pub fn primitive_mapping(kind: SchemaKind, keyword_ignore_above: u32) -> Option<LeafMapping> {
    es_type_for(kind).map(|es_type| LeafMapping {
        es_type,
        options: FieldOptions::for_type(es_type, keyword_ignore_above),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_mappable_primitive_has_an_es_type() {
        let expected = [
            (SchemaKind::Int, json!({"type": "integer"})),
            (
                SchemaKind::String,
                json!({"type": "keyword", "ignore_above": 256, "norms": false, "index_options": "freqs"}),
            ),
            (SchemaKind::Bytes, json!({"type": "binary"})),
            (SchemaKind::Boolean, json!({"type": "boolean"})),
            (SchemaKind::Long, json!({"type": "long"})),
            (SchemaKind::Float, json!({"type": "float"})),
            (SchemaKind::Double, json!({"type": "double"})),
        ];
        for (kind, json) in expected {
            assert!(kind.is_primitive());
            let leaf = primitive_mapping(kind, 256).unwrap();
            assert_eq!(serde_json::to_value(&leaf).unwrap(), json, "{kind}");
        }
    }

    #[test]
    fn null_and_complex_kinds_have_no_es_type() {
        for kind in [
            SchemaKind::Null,
            SchemaKind::Record,
            SchemaKind::Enum,
            SchemaKind::Array,
            SchemaKind::Map,
            SchemaKind::Union,
            SchemaKind::Fixed,
        ] {
            assert_eq!(es_type_for(kind), None, "{kind}");
        }
    }
}
