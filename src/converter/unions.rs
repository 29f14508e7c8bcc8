use crate::avro::{Schema, SchemaKind};

/// Pick the union branch to map.
///
/// `null` branches are dropped and the last remaining branch wins; any
/// earlier non-null branch is ignored. Returns `None` for a union of nulls.
pub fn select_branch(variants: &[Schema]) -> Option<&Schema> {
    variants.iter().rev().find(|s| s.kind() != SchemaKind::Null)
}
