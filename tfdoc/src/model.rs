//! Data model for provider schemas and generated documentation, format-agnostic.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Declared kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    Set,
    /// Anything the loader does not recognize
    #[default]
    #[serde(other)]
    Unknown,
}

impl Kind {
    /// Canonical display token for the kind. Unknown kinds render blank.
    pub fn token(self) -> &'static str {
        match self {
            Kind::Bool => "Bool",
            Kind::Int => "Int",
            Kind::Float => "Float64",
            Kind::String => "String",
            Kind::List => "List",
            Kind::Map => "Map",
            Kind::Set => "Set",
            Kind::Unknown => "",
        }
    }

    /// Whether the kind is a collection that may carry an element.
    pub fn is_collection(self) -> bool {
        matches!(self, Kind::List | Kind::Map | Kind::Set)
    }
}

/// Element type of a collection field.
///
/// In the manifest a scalar element is a plain string (`"elem": "string"`),
/// a nested object is a map of fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Object(Object),
    Scalar(Kind),
}

/// Order-irrelevant mapping from field name to field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Object {
    pub fields: BTreeMap<String, Field>,
}

impl Object {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }
}

impl<S: Into<String>> FromIterator<(S, Field)> for Object {
    fn from_iter<I: IntoIterator<Item = (S, Field)>>(iter: I) -> Self {
        Object {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A named schema leaf or branch (the name is its key in the parent object).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Field {
    #[serde(rename = "type")]
    pub kind: Kind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub force_new: bool,
    /// Deprecation notice; non-empty marks the field deprecated
    pub deprecated: String,
    pub description: String,
    pub elem: Option<Element>,
}

#[cfg(test)]
impl Field {
    pub fn new(kind: Kind) -> Self {
        Field {
            kind,
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn deprecated(mut self, notice: &str) -> Self {
        self.deprecated = notice.to_string();
        self
    }

    pub fn describe(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn elem(mut self, elem: Element) -> Self {
        self.elem = Some(elem);
        self
    }
}

impl Field {
    /// The nested object reachable through a list/map/set field, if any.
    pub fn nested(&self) -> Option<&Object> {
        if !self.kind.is_collection() {
            return None;
        }
        match self.elem {
            Some(Element::Object(ref object)) => Some(object),
            _ => None,
        }
    }

    /// The scalar element kind of a list/map/set field, if any.
    pub fn scalar_elem(&self) -> Option<Kind> {
        if !self.kind.is_collection() {
            return None;
        }
        match self.elem {
            Some(Element::Scalar(kind)) => Some(kind),
            _ => None,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        !self.deprecated.is_empty()
    }
}

/// Resource or data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntityKind {
    Resource,
    DataSource,
}

impl EntityKind {
    /// Directory segment under a product directory.
    pub fn dir(self) -> &'static str {
        match self {
            EntityKind::Resource => "r",
            EntityKind::DataSource => "d",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Resource => "resource",
            EntityKind::DataSource => "data source",
        }
    }
}

/// Schema plus raw description text for one entity (or the provider itself).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntitySource {
    pub description: String,
    pub schema: Object,
}

/// A complete provider as supplied by the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct Provider {
    /// Entity name prefix, e.g. "edgenext" for "edgenext_cdn_domain"
    pub namespace: String,
    /// Human readable provider name
    pub title: String,
    #[serde(default)]
    pub provider: EntitySource,
    /// Raw product listing (see `parser::index`)
    #[serde(default)]
    pub index: String,
    #[serde(default)]
    pub resources: BTreeMap<String, EntitySource>,
    #[serde(default)]
    pub data_sources: BTreeMap<String, EntitySource>,
}

impl Provider {
    /// Look up an entity by kind and name.
    pub fn entity(&self, kind: EntityKind, name: &str) -> Option<&EntitySource> {
        match kind {
            EntityKind::Resource => self.resources.get(name),
            EntityKind::DataSource => self.data_sources.get(name),
        }
    }

    /// Strip the namespace prefix: "edgenext_cdn_domain" → "cdn_domain".
    pub fn short_name<'a>(&self, name: &'a str) -> &'a str {
        name.strip_prefix(&self.namespace)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(name)
    }
}

/// One product group from the index listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub resources: Vec<String>,
    pub data_sources: Vec<String>,
}

/// A titled nested-object section produced by the sub-structure extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubStructure {
    /// Name of the field holding the nested object
    pub name: String,
    /// Name of the field one level up; `None` at depth 0
    pub parent: Option<String>,
    pub depth: usize,
    /// Required lines (sorted) followed by optional lines (sorted)
    pub lines: Vec<String>,
}

impl SubStructure {
    pub fn title(&self) -> String {
        match self.parent {
            Some(ref parent) if self.depth > 0 => format!(
                "The `{}` object of `{}` supports the following:",
                self.name, parent
            ),
            _ => format!("The `{}` object supports the following:", self.name),
        }
    }

    /// Full section text: title, blank line, child lines.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return self.title();
        }
        format!("{}\n\n{}", self.title(), self.lines.join("\n"))
    }
}

/// One parsed example: prose title and body plus reformatted code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageBlock {
    pub title: String,
    pub body: String,
    pub code: String,
}

/// Rendered output document with its path relative to the docs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDoc {
    pub path: std::path::PathBuf,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tokens() {
        assert_eq!(Kind::Bool.token(), "Bool");
        assert_eq!(Kind::Float.token(), "Float64");
        assert_eq!(Kind::Set.token(), "Set");
        assert_eq!(Kind::Unknown.token(), "");
    }

    #[test]
    fn field_from_json() {
        let json = r#"{
            "type": "list",
            "optional": true,
            "description": "Rules.",
            "elem": { "path": { "type": "string", "required": true } }
        }"#;
        let field: Field = serde_json::from_str(json).unwrap();
        assert_eq!(field.kind, Kind::List);
        assert!(field.optional);
        let nested = field.nested().unwrap();
        assert!(nested.fields["path"].required);
    }

    #[test]
    fn scalar_elem_from_json() {
        let field: Field =
            serde_json::from_str(r#"{"type": "set", "elem": "string"}"#).unwrap();
        assert_eq!(field.scalar_elem(), Some(Kind::String));
        assert!(field.nested().is_none());
    }

    #[test]
    fn unknown_kind_is_tolerated() {
        let field: Field = serde_json::from_str(r#"{"type": "tuple"}"#).unwrap();
        assert_eq!(field.kind, Kind::Unknown);
    }

    #[test]
    fn elem_ignored_on_scalar_kind() {
        let field = Field::new(Kind::String).elem(Element::Scalar(Kind::Int));
        assert!(field.scalar_elem().is_none());
    }

    #[test]
    fn short_name_strips_namespace() {
        let provider: Provider =
            serde_json::from_str(r#"{"namespace": "edgenext", "title": "EdgeNext"}"#).unwrap();
        assert_eq!(provider.short_name("edgenext_cdn_domain"), "cdn_domain");
        assert_eq!(provider.short_name("other_thing"), "other_thing");
    }

    #[test]
    fn substructure_titles() {
        let root = SubStructure {
            name: "rules".into(),
            parent: None,
            depth: 0,
            lines: vec!["* `path` - (Required, String) Path.".into()],
        };
        assert_eq!(
            root.render(),
            "The `rules` object supports the following:\n\n* `path` - (Required, String) Path."
        );
        let child = SubStructure {
            name: "headers".into(),
            parent: Some("rules".into()),
            depth: 1,
            lines: vec![],
        };
        assert_eq!(
            child.title(),
            "The `headers` object of `rules` supports the following:"
        );
    }
}
