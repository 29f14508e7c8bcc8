use serde::Serialize;

use super::EsType;

/// Default `ignore_above` for keyword fields. Longer strings are not indexed.
pub const KEYWORD_IGNORE_ABOVE: u32 = 256;

/// What an inverted index records per term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexOptions {
    Docs,
    Freqs,
    Positions,
    Offsets,
}

/// Extra indexing options attached to a leaf field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_above: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub norms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_options: Option<IndexOptions>,
}

impl FieldOptions {
    /// The fixed option set for an Elasticsearch type.
    ///
    /// Keywords skip long values, drop scoring norms and index doc numbers
    /// with term frequencies. Every other type carries no options.
    pub fn for_type(es_type: EsType, ignore_above: u32) -> Self {
        match es_type {
            EsType::Keyword => Self {
                ignore_above: Some(ignore_above),
                norms: Some(false),
                index_options: Some(IndexOptions::Freqs),
            },
            EsType::Integer
            | EsType::Binary
            | EsType::Boolean
            | EsType::Long
            | EsType::Float
            | EsType::Double => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ignore_above.is_none() && self.norms.is_none() && self.index_options.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_keyword_has_options() {
        let keyword = FieldOptions::for_type(EsType::Keyword, KEYWORD_IGNORE_ABOVE);
        assert_eq!(keyword.ignore_above, Some(256));
        assert_eq!(keyword.norms, Some(false));
        assert_eq!(keyword.index_options, Some(IndexOptions::Freqs));

        for es_type in [
            EsType::Integer,
            EsType::Binary,
            EsType::Boolean,
            EsType::Long,
            EsType::Float,
            EsType::Double,
        ] {
            assert!(FieldOptions::for_type(es_type, KEYWORD_IGNORE_ABOVE).is_empty());
        }
    }
}
