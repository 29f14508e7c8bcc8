use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

use super::names::{is_valid_fullname, is_valid_name, Name};
use super::{EnumSchema, Field, FixedSchema, RecordSchema, Schema};

/// Errors raised while reading Avro schema JSON.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{context}: missing required attribute `{attribute}`")]
    MissingAttribute {
        context: String,
        attribute: &'static str,
    },

    #[error("{context}: attribute `{attribute}` has an unexpected value")]
    InvalidAttribute {
        context: String,
        attribute: &'static str,
    },

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Type {0} is defined more than once")]
    DuplicateType(String),

    #[error("Record {record} declares field {field:?} more than once")]
    DuplicateField { record: String, field: String },

    #[error("Recursive reference to {0} is not supported")]
    RecursiveType(String),

    #[error("Expected a schema, found {0}")]
    UnexpectedValue(String),
}

impl Schema {
    /// Parse Avro schema JSON text (the contents of an `.avsc` file).
    pub fn parse_str(input: &str) -> Result<Schema, ParseError> {
        let value: Value = serde_json::from_str(input)?;
        Self::parse(&value)
    }

    /// Parse an already decoded Avro schema JSON value.
    pub fn parse(value: &Value) -> Result<Schema, ParseError> {
        Parser::default().parse(value, None)
    }
}

/// Named types seen so far, keyed by full name.
#[derive(Default)]
struct Parser {
    named: HashMap<String, Schema>,
    in_progress: HashSet<String>,
}

impl Parser {
    fn parse(&mut self, value: &Value, enclosing: Option<&str>) -> Result<Schema, ParseError> {
        match value {
            Value::String(name) => self.parse_reference(name, enclosing),
            Value::Array(variants) => variants
                .iter()
                .map(|v| self.parse(v, enclosing))
                .collect::<Result<Vec<_>, _>>()
                .map(Schema::Union),
            Value::Object(obj) => self.parse_complex(obj, enclosing),
            other => Err(ParseError::UnexpectedValue(other.to_string())),
        }
    }

    fn parse_reference(&self, name: &str, enclosing: Option<&str>) -> Result<Schema, ParseError> {
        if let Some(primitive) = Schema::primitive(name) {
            return Ok(primitive);
        }
        let qualified = Name::resolve(name, None, enclosing).fullname();
        for key in [qualified.as_str(), name] {
            if self.in_progress.contains(key) {
                return Err(ParseError::RecursiveType(key.to_string()));
            }
            if let Some(schema) = self.named.get(key) {
                return Ok(schema.clone());
            }
        }
        Err(ParseError::UnknownType(name.to_string()))
    }

    fn parse_complex(
        &mut self,
        obj: &Map<String, Value>,
        enclosing: Option<&str>,
    ) -> Result<Schema, ParseError> {
        let tag = match required(obj, "type", "schema")? {
            Value::String(tag) => tag.as_str(),
            nested => return self.parse(nested, enclosing),
        };

        match tag {
            "record" | "error" => self.parse_record(obj, enclosing),
            "enum" => self.parse_enum(obj, enclosing),
            "fixed" => self.parse_fixed(obj, enclosing),
            "array" => {
                let items = required(obj, "items", "array")?;
                Ok(Schema::Array(Box::new(self.parse(items, enclosing)?)))
            }
            "map" => {
                let values = required(obj, "values", "map")?;
                Ok(Schema::Map(Box::new(self.parse(values, enclosing)?)))
            }
            // Primitives with extra attributes such as `logicalType`, or a
            // reference wrapped in an object.
            other => self.parse_reference(other, enclosing),
        }
    }

    fn parse_record(
        &mut self,
        obj: &Map<String, Value>,
        enclosing: Option<&str>,
    ) -> Result<Schema, ParseError> {
        let name = self.begin_named(obj, enclosing, "record")?;
        let context = name.fullname();
        let fields_json = required(obj, "fields", &context)?
            .as_array()
            .ok_or_else(|| invalid(&context, "fields"))?;

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(fields_json.len());
        for field_json in fields_json {
            let field_obj = field_json
                .as_object()
                .ok_or_else(|| invalid(&context, "fields"))?;
            let field_name = required_str(field_obj, "name", &context)?;
            if !is_valid_name(field_name) {
                return Err(ParseError::InvalidName(field_name.to_string()));
            }
            if !seen.insert(field_name) {
                return Err(ParseError::DuplicateField {
                    record: context,
                    field: field_name.to_string(),
                });
            }
            let field_context = format!("{context}.{field_name}");
            let schema = self.parse(
                required(field_obj, "type", &field_context)?,
                name.namespace.as_deref(),
            )?;
            fields.push(Field {
                name: field_name.to_string(),
                doc: doc(field_obj),
                schema,
            });
        }

        let record = Schema::Record(RecordSchema {
            name,
            doc: doc(obj),
            fields,
        });
        Ok(self.finish_named(context, record))
    }

    fn parse_enum(
        &mut self,
        obj: &Map<String, Value>,
        enclosing: Option<&str>,
    ) -> Result<Schema, ParseError> {
        let name = self.begin_named(obj, enclosing, "enum")?;
        let context = name.fullname();
        let symbols = required(obj, "symbols", &context)?
            .as_array()
            .ok_or_else(|| invalid(&context, "symbols"))?
            .iter()
            .map(|s| match s.as_str() {
                Some(sym) if is_valid_name(sym) => Ok(sym.to_string()),
                Some(sym) => Err(ParseError::InvalidName(sym.to_string())),
                None => Err(invalid(&context, "symbols")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.finish_named(context, Schema::Enum(EnumSchema { name, symbols })))
    }

    fn parse_fixed(
        &mut self,
        obj: &Map<String, Value>,
        enclosing: Option<&str>,
    ) -> Result<Schema, ParseError> {
        let name = self.begin_named(obj, enclosing, "fixed")?;
        let context = name.fullname();
        let size = required(obj, "size", &context)?
            .as_u64()
            .ok_or_else(|| invalid(&context, "size"))?;

        let fixed = Schema::Fixed(FixedSchema {
            name,
            size: size as usize,
        });
        Ok(self.finish_named(context, fixed))
    }

    /// Validate and reserve the name of a named type.
    fn begin_named(
        &mut self,
        obj: &Map<String, Value>,
        enclosing: Option<&str>,
        context: &str,
    ) -> Result<Name, ParseError> {
        let raw = required_str(obj, "name", context)?;
        if !is_valid_fullname(raw) {
            return Err(ParseError::InvalidName(raw.to_string()));
        }
        let namespace = match obj.get("namespace") {
            None | Some(Value::Null) => None,
            Some(Value::String(ns)) if ns.is_empty() || is_valid_fullname(ns) => Some(ns.as_str()),
            Some(Value::String(ns)) => return Err(ParseError::InvalidName(ns.clone())),
            Some(_) => return Err(invalid(raw, "namespace")),
        };

        let name = Name::resolve(raw, namespace, enclosing);
        let key = name.fullname();
        if self.named.contains_key(&key) || self.in_progress.contains(&key) {
            return Err(ParseError::DuplicateType(key));
        }
        self.in_progress.insert(key);
        Ok(name)
    }

    fn finish_named(&mut self, key: String, schema: Schema) -> Schema {
        self.in_progress.remove(&key);
        self.named.insert(key, schema.clone());
        schema
    }
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    attribute: &'static str,
    context: &str,
) -> Result<&'a Value, ParseError> {
    obj.get(attribute).ok_or_else(|| ParseError::MissingAttribute {
        context: context.to_string(),
        attribute,
    })
}

fn required_str<'a>(
    obj: &'a Map<String, Value>,
    attribute: &'static str,
    context: &str,
) -> Result<&'a str, ParseError> {
    required(obj, attribute, context)?
        .as_str()
        .ok_or_else(|| invalid(context, attribute))
}

fn invalid(context: &str, attribute: &'static str) -> ParseError {
    ParseError::InvalidAttribute {
        context: context.to_string(),
        attribute,
    }
}

fn doc(obj: &Map<String, Value>) -> Option<String> {
    obj.get("doc").and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avro::SchemaKind;
    use serde_json::json;

    fn record(schema: &Schema) -> &RecordSchema {
        match schema {
            Schema::Record(r) => r,
            other => panic!("expected record, got {:?}", other.kind()),
        }
    }

    #[test]
    fn parses_simple_record() {
        let schema = Schema::parse(&json!({
            "type": "record",
            "name": "Person",
            "namespace": "com.example",
            "doc": "A person",
            "fields": [
                {"name": "Name", "type": "string"},
                {"name": "Age", "type": "int", "doc": "in years"}
            ]
        }))
        .unwrap();

        let person = record(&schema);
        assert_eq!(person.name.fullname(), "com.example.Person");
        assert_eq!(person.doc.as_deref(), Some("A person"));
        assert_eq!(person.fields.len(), 2);
        assert_eq!(person.fields[0].schema, Schema::String);
        assert_eq!(person.field("Age").unwrap().doc.as_deref(), Some("in years"));
    }

    #[test]
    fn parses_unions_arrays_and_maps() {
        let schema = Schema::parse(&json!({
            "type": "record",
            "name": "Bag",
            "fields": [
                {"name": "address", "type": ["null", "string"]},
                {"name": "integers", "type": {"type": "array", "items": "int"}},
                {"name": "labels", "type": {"type": "map", "values": "string"}}
            ]
        }))
        .unwrap();

        let bag = record(&schema);
        assert_eq!(
            bag.fields[0].schema,
            Schema::Union(vec![Schema::Null, Schema::String])
        );
        assert_eq!(bag.fields[1].schema, Schema::Array(Box::new(Schema::Int)));
        assert_eq!(bag.fields[2].schema.kind(), SchemaKind::Map);
    }

    #[test]
    fn logical_types_resolve_to_their_primitive() {
        let schema = Schema::parse(&json!({"type": "int", "logicalType": "date"})).unwrap();
        assert_eq!(schema, Schema::Int);

        let schema = Schema::parse(&json!({"type": {"type": "long"}})).unwrap();
        assert_eq!(schema, Schema::Long);
    }

    #[test]
    fn resolves_named_references_in_enclosing_namespace() {
        let schema = Schema::parse(&json!({
            "type": "record",
            "name": "Order",
            "namespace": "shop",
            "fields": [
                {"name": "billing", "type": {
                    "type": "record",
                    "name": "Address",
                    "fields": [{"name": "city", "type": "string"}]
                }},
                {"name": "shipping", "type": "Address"},
                {"name": "fallback", "type": ["null", "shop.Address"]}
            ]
        }))
        .unwrap();

        let order = record(&schema);
        let billing = &order.fields[0].schema;
        assert_eq!(billing.name().unwrap().fullname(), "shop.Address");
        assert_eq!(&order.fields[1].schema, billing);
        assert_eq!(order.fields[2].schema, Schema::Union(vec![Schema::Null, billing.clone()]));
    }

    #[test]
    fn parses_enum_and_fixed() {
        let schema = Schema::parse(&json!([
            {"type": "enum", "name": "Suit", "symbols": ["HEARTS", "SPADES"]},
            {"type": "fixed", "name": "md5", "size": 16}
        ]))
        .unwrap();

        let Schema::Union(variants) = schema else {
            panic!("expected union");
        };
        assert_eq!(
            variants[0],
            Schema::Enum(EnumSchema {
                name: Name::resolve("Suit", None, None),
                symbols: vec!["HEARTS".into(), "SPADES".into()],
            })
        );
        assert_eq!(variants[1].kind(), SchemaKind::Fixed);
    }

    #[test]
    fn rejects_recursive_records() {
        let err = Schema::parse(&json!({
            "type": "record",
            "name": "Node",
            "fields": [{"name": "next", "type": ["null", "Node"]}]
        }))
        .unwrap_err();
        assert!(matches!(err, ParseError::RecursiveType(name) if name == "Node"));
    }

    #[test]
    fn rejects_unknown_references() {
        let err = Schema::parse(&json!({
            "type": "record",
            "name": "R",
            "fields": [{"name": "x", "type": "Missing"}]
        }))
        .unwrap_err();
        assert!(matches!(err, ParseError::UnknownType(name) if name == "Missing"));
    }

    #[test]
    fn rejects_duplicate_fields_and_types() {
        let err = Schema::parse(&json!({
            "type": "record",
            "name": "R",
            "fields": [{"name": "x", "type": "int"}, {"name": "x", "type": "long"}]
        }))
        .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateField { field, .. } if field == "x"));

        let err = Schema::parse(&json!([
            {"type": "fixed", "name": "F", "size": 4},
            {"type": "fixed", "name": "F", "size": 8}
        ]))
        .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateType(name) if name == "F"));
    }

    #[test]
    fn reports_missing_attributes() {
        let err = Schema::parse(&json!({"type": "array"})).unwrap_err();
        assert_eq!(err.to_string(), "array: missing required attribute `items`");

        let err = Schema::parse(&json!({"type": "record", "name": "R"})).unwrap_err();
        assert_eq!(err.to_string(), "R: missing required attribute `fields`");
    }

    #[test]
    fn rejects_invalid_names() {
        let err = Schema::parse(&json!({
            "type": "record",
            "name": "R",
            "fields": [{"name": "bad-name", "type": "int"}]
        }))
        .unwrap_err();
        assert!(matches!(err, ParseError::InvalidName(_)));
    }

    #[test]
    fn rejects_non_schema_json() {
        assert!(matches!(
            Schema::parse(&json!(42)),
            Err(ParseError::UnexpectedValue(_))
        ));
        assert!(matches!(Schema::parse_str("{"), Err(ParseError::Json(_))));
    }
}
