use crate::mapping::options::KEYWORD_IGNORE_ABOVE;

/// Holds the settings for converting Avro Schema → Elasticsearch mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTranslator {
    /// Wrap array and union field results in `{"properties": ...}`, even when
    /// the element is a primitive. Existing indices were created with this
    /// shape, so it stays on by default.
    pub wrap_collections: bool,
    pub keyword_ignore_above: u32,
}

impl Default for MappingTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingTranslator {
    /// Create a new translator with default settings.
    pub fn new() -> Self {
        Self {
            wrap_collections: true,
            keyword_ignore_above: KEYWORD_IGNORE_ABOVE,
        }
    }

    pub fn with_wrap_collections(mut self, wrap: bool) -> Self {
        self.wrap_collections = wrap;
        self
    }

    pub fn with_keyword_ignore_above(mut self, ignore_above: u32) -> Self {
        self.keyword_ignore_above = ignore_above;
        self
    }
}
