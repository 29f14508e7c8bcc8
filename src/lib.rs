//! # avro2es
//!
//! Convert [Apache Avro](https://avro.apache.org/) schemas into
//! [Elasticsearch](https://www.elastic.co/elasticsearch) index mappings.
//!
//! ## Features
//!
//! - Maps Avro primitives to Elasticsearch field types
//! - Flattens nested records into `properties`
//! - Maps nullable unions to their non-null branch
//! - Maps arrays through their item type
//! - Skips `enum`, `map` and `fixed` fields, reporting each skip
//! - Always produces `"dynamic": "strict"` mappings
//! - CLI tool `avro2es` for file conversion
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use avro2es::avro::Schema;
//! use avro2es::converter::MappingTranslator;
//! use avro2es::diagnostics::Diagnostic;
//!
//! let schema = Schema::parse_str(r#"{
//!     "type": "record",
//!     "name": "Person",
//!     "fields": [
//!         {"name": "Name", "type": "string"},
//!         {"name": "Age", "type": "int"}
//!     ]
//! }"#).unwrap();
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let mapping = MappingTranslator::default().index_mapping(&schema, &mut diagnostics);
//!
//! assert_eq!(
//!     mapping.to_json().unwrap(),
//!     r#"{"mappings":{"dynamic":"strict","properties":{"Name":{"type":"keyword","ignore_above":256,"norms":false,"index_options":"freqs"},"Age":{"type":"integer"}}}}"#
//! );
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! avro2es schema.avsc mapping.json
//! ```
//!
//! ## Crate Layout
//!
//! - [`avro`] — Avro schema tree and `.avsc` parser
//! - [`mapping`] — Elasticsearch mapping document types
//! - [`converter`] — Avro → Elasticsearch translation
//! - [`diagnostics`] — Notices for skipped fields
//! - [`error`] — Error type for file-level conversion
//!
//! The CLI binary is enabled with the `cli` feature.
pub mod avro;
pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod mapping;

pub use error::{Error, Result};
