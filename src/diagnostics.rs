//! Notices raised while translating a schema.
//!
//! Unsupported Avro kinds are skipped, not fatal. The converter reports
//! each skip to a [`DiagnosticSink`] and carries on.
use std::fmt;

use crate::avro::SchemaKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A record field was left out of the mapping.
    UnsupportedField { field: String, kind: SchemaKind },
    /// A union field has no branch other than `null`.
    EmptyUnion { field: String },
    /// The root schema has no mapping at all.
    UnmappedRoot { kind: SchemaKind },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedField { field, kind } => {
                write!(f, "field {field:?}: {kind} is not supported, skipped")
            }
            Diagnostic::EmptyUnion { field } => {
                write!(f, "field {field:?}: union has no non-null branch, skipped")
            }
            Diagnostic::UnmappedRoot { kind } => {
                write!(f, "root schema of kind {kind} produces no mapping")
            }
        }
    }
}

/// Receives diagnostics from the converter.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emits each diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::UnsupportedField { field, kind } => {
                tracing::warn!(field = %field, kind = %kind, "{diagnostic}")
            }
            Diagnostic::EmptyUnion { field } => tracing::warn!(field = %field, "{diagnostic}"),
            Diagnostic::UnmappedRoot { kind } => tracing::warn!(kind = %kind, "{diagnostic}"),
        }
    }
}

/// Drops every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreSink;

impl DiagnosticSink for IgnoreSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
