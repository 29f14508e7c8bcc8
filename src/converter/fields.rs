use crate::avro::{Field, RecordSchema, Schema};
use crate::converter::state::MappingTranslator;
use crate::converter::unions::select_branch;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::mapping::{FieldMapping, Mapping, Properties};

impl MappingTranslator {
    /// Translate the fields of a record, in declared order.
    ///
    /// Fields whose type has no mapping are left out and reported to `sink`.
    pub(crate) fn translate_fields(
        &self,
        record: &RecordSchema,
        sink: &mut dyn DiagnosticSink,
    ) -> Properties {
        let mut properties = Properties::with_capacity(record.fields.len());
        for field in &record.fields {
            if let Some(mapping) = self.translate_field(field, sink) {
                properties.insert(field.name.clone(), mapping);
            }
        }
        properties
    }

    fn translate_field(&self, field: &Field, sink: &mut dyn DiagnosticSink) -> Option<FieldMapping> {
        match &field.schema {
            Schema::Record(nested) => Some(FieldMapping::object(Mapping::Properties(
                self.translate_fields(nested, sink),
            ))),
            Schema::Union(variants) => match select_branch(variants) {
                Some(branch) => self.translate_collection(field, branch, sink),
                None => {
                    sink.report(Diagnostic::EmptyUnion {
                        field: field.name.clone(),
                    });
                    None
                }
            },
            Schema::Array(items) => self.translate_collection(field, items, sink),
            Schema::Boolean
            | Schema::Int
            | Schema::Long
            | Schema::Float
            | Schema::Double
            | Schema::Bytes
            | Schema::String => self.primitive(field.schema.kind()).map(FieldMapping::Leaf),
            Schema::Null | Schema::Enum(_) | Schema::Map(_) | Schema::Fixed(_) => {
                sink.report(Diagnostic::UnsupportedField {
                    field: field.name.clone(),
                    kind: field.schema.kind(),
                });
                None
            }
        }
    }

    /// Array items and the selected union branch are translated as if they
    /// were the field's own type.
    fn translate_collection(
        &self,
        field: &Field,
        inner: &Schema,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<FieldMapping> {
        match self.translate_node(inner, sink) {
            Some(Mapping::Leaf(leaf)) if !self.wrap_collections => Some(FieldMapping::Leaf(leaf)),
            Some(mapping) => Some(FieldMapping::object(mapping)),
            None => {
                sink.report(Diagnostic::UnsupportedField {
                    field: field.name.clone(),
                    kind: inner.kind(),
                });
                None
            }
        }
    }
}
