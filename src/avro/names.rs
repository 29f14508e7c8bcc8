use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid name regex"));

/// A fully qualified Avro name: `namespace.name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub name: String,
    pub namespace: Option<String>,
}

impl Name {
    /// Resolve a (possibly dotted) name against the enclosing namespace.
    ///
    /// A dotted name carries its own namespace and ignores both `namespace`
    /// and `enclosing`, as in the Avro specification.
    pub fn resolve(name: &str, namespace: Option<&str>, enclosing: Option<&str>) -> Self {
        if let Some((ns, simple)) = name.rsplit_once('.') {
            return Self {
                name: simple.to_string(),
                namespace: Some(ns.to_string()).filter(|ns| !ns.is_empty()),
            };
        }
        let namespace = namespace
            .or(enclosing)
            .filter(|ns| !ns.is_empty())
            .map(str::to_string);
        Self {
            name: name.to_string(),
            namespace,
        }
    }

    pub fn fullname(&self) -> String {
        fullname(&self.name, self.namespace.as_deref())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fullname())
    }
}

/// Build the full name of an Avro type from `name` and `namespace`.
pub fn fullname(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() && !name.contains('.') => format!("{ns}.{name}"),
        _ => name.to_string(),
    }
}

/// Check a simple (undotted) Avro name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Check a dotted name or namespace; every segment must be a valid name.
pub fn is_valid_fullname(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_valid_name)
}
