pub mod fields;
pub mod primitives;
pub mod state;
pub mod unions;

pub use state::MappingTranslator;

use std::fs;
use std::path::Path;
use url::Url;

use crate::avro::Schema;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::{Error, Result};
use crate::mapping::{IndexMapping, LeafMapping, Mapping};
use primitives::primitive_mapping;

impl MappingTranslator {
    /// Translate an Avro schema into the `properties` of an Elasticsearch mapping.
    ///
    /// A record root yields its field properties and a primitive root yields a
    /// single leaf. Any other root has no mapping: `None` is returned and an
    /// [`Diagnostic::UnmappedRoot`] is reported.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all, fields(kind = %schema.kind())))]
    pub fn translate(&self, schema: &Schema, sink: &mut dyn DiagnosticSink) -> Option<Mapping> {
        let mapping = self.translate_node(schema, sink);
        if mapping.is_none() {
            sink.report(Diagnostic::UnmappedRoot {
                kind: schema.kind(),
            });
        }
        mapping
    }

    /// Translate and wrap in a strict `{"mappings": ...}` document.
    pub fn index_mapping(&self, schema: &Schema, sink: &mut dyn DiagnosticSink) -> IndexMapping {
        IndexMapping::new(self.translate(schema, sink))
    }

    pub(crate) fn translate_node(
        &self,
        schema: &Schema,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Mapping> {
        match schema {
            Schema::Record(record) => Some(Mapping::Properties(self.translate_fields(record, sink))),
            other => self.primitive(other.kind()).map(Mapping::Leaf),
        }
    }

    pub(crate) fn primitive(&self, kind: crate::avro::SchemaKind) -> Option<LeafMapping> {
        primitive_mapping(kind, self.keyword_ignore_above)
    }
}

/// Translate with default settings.
pub fn translate(schema: &Schema, sink: &mut dyn DiagnosticSink) -> Option<Mapping> {
    MappingTranslator::default().translate(schema, sink)
}

/// Convert an in-memory Avro schema into a complete index mapping document.
pub fn schema_to_index_mapping(
    schema: &Schema,
    translator: &MappingTranslator,
    sink: &mut dyn DiagnosticSink,
) -> IndexMapping {
    translator.index_mapping(schema, sink)
}

/// Read Avro schema text from a file path or an `http(s)` URL.
pub fn read_schema_source(input: &str) -> Result<String> {
    match Url::parse(input) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(reqwest::blocking::get(url)?.error_for_status()?.text()?)
        }
        _ => fs::read_to_string(input).map_err(|source| Error::Read {
            path: input.to_string(),
            source,
        }),
    }
}

/// Convert an Avro schema file into an Elasticsearch mapping.
///
/// Reads the `.avsc` from disk or HTTP, translates it and, when `output` is
/// given, writes the JSON document there. Skipped fields are logged through
/// `tracing`.
///
/// # Arguments
/// * `input` - Path or URL of the Avro schema.
/// * `output` - Optional path for the mapping JSON.
/// * `translator` - Translation settings.
/// * `pretty` - Indent the written JSON.
pub fn convert_avro_to_es(
    input: &str,
    output: Option<&Path>,
    translator: &MappingTranslator,
    pretty: bool,
) -> Result<IndexMapping> {
    let content = read_schema_source(input)?;
    let schema = Schema::parse_str(&content)?;
    let mapping = translator.index_mapping(&schema, &mut TracingSink);

    if let Some(path) = output {
        let json = if pretty {
            mapping.to_json_pretty()?
        } else {
            mapping.to_json()?
        };
        fs::write(path, json).map_err(|source| Error::Write {
            path: path.display().to_string(),
            source,
        })?;
    }

    Ok(mapping)
}
