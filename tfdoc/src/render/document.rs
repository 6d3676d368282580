//! Entity document assembly.

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::model::{EntityKind, EntitySource, Provider};
use crate::parser::{description, usage};
use crate::render::arguments::{self, Classified, Context};
use crate::render::{assemble, yaml_block};

const RESOURCE_ID_ATTRIBUTE: &str = "* `id` - ID of the resource.";

const ENTITY_HEAD: &str = r#"---
subcategory: "${product}"
layout: "${namespace}"
page_title: "${title}: ${name}"
description: |-
  ${description_short}
---

# ${name}
"#;

const ENTITY_SECTIONS: &[(&str, &str)] = &[
    ("description", "${description}\n"),
    ("example", "## Example Usage\n\n${example}\n"),
    (
        "arguments",
        "## Argument Reference\n\nThe following arguments are supported:\n\n${arguments}\n",
    ),
    (
        "attributes",
        "## Attributes Reference\n\nIn addition to all arguments above, the following attributes are exported:\n\n${attributes}\n",
    ),
    ("import", "## Import\n\n${import}\n"),
];

/// One resource or data source to document.
pub struct Entity<'a> {
    pub provider: &'a Provider,
    pub kind: EntityKind,
    pub name: &'a str,
    pub product: &'a str,
    pub source: &'a EntitySource,
}

/// Render the reference page of one entity.
pub fn render_entity(entity: &Entity, diag: &mut Diagnostics) -> Result<String> {
    let name = entity.name;
    let sections = description::split(entity.source.description.trim());
    if sections.description.is_empty() {
        return Err(Error::EmptyDescription {
            entity: name.to_string(),
        });
    }
    let Some(example) = sections.example else {
        return Err(Error::MissingExampleUsage {
            entity: name.to_string(),
        });
    };

    let blocks = usage::parse(example, name, true, diag)?;
    let example = usage::render(&blocks);

    let ctx = Context {
        entity: name,
        read_only: entity.kind == EntityKind::DataSource,
    };
    let classified = arguments::classify(&entity.source.schema, &ctx, diag)?;
    let arguments = arguments_body(&classified);

    let mut attributes = classified.attributes;
    if entity.kind == EntityKind::Resource {
        attributes.insert(0, RESOURCE_ID_ATTRIBUTE.to_string());
    }
    let attributes = attributes.join("\n");

    let description_short = yaml_block(description::short_description(sections.description));
    let import = sections.import.unwrap_or_default();

    let vars = [
        ("product", entity.product),
        ("namespace", entity.provider.namespace.as_str()),
        ("title", entity.provider.title.as_str()),
        ("name", name),
        ("description_short", description_short.as_str()),
        ("description", sections.description),
        ("example", example.as_str()),
        ("arguments", arguments.as_str()),
        ("attributes", attributes.as_str()),
        ("import", import),
    ];
    Ok(assemble(ENTITY_HEAD, ENTITY_SECTIONS, &vars))
}

/// Argument lines followed by the nested-object sections.
pub(crate) fn arguments_body(classified: &Classified) -> String {
    let mut parts = Vec::new();
    let lines = classified.arguments();
    if !lines.is_empty() {
        parts.push(lines.join("\n"));
    }
    parts.extend(classified.sub_structures.iter().map(|s| s.render()));
    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Warning;
    use crate::model::{Element, Field, Kind, Object};

    fn provider() -> Provider {
        serde_json::from_str(r#"{"namespace": "edgenext", "title": "EdgeNext"}"#).unwrap()
    }

    fn object(fields: Vec<(&str, Field)>) -> Object {
        fields.into_iter().collect()
    }

    fn source(description: &str, schema: Object) -> EntitySource {
        EntitySource {
            description: description.to_string(),
            schema,
        }
    }

    const DESCRIPTION: &str = "Provides a CDN domain.\n\nExample Usage\n\nBasic usage\n\n```hcl\nresource \"edgenext_cdn_domain\" \"foo\" {\ndomain = \"a.com\"\n}\n```\n\nImport\n\nterraform import edgenext_cdn_domain.foo a.com\n";

    fn render(kind: EntityKind, src: &EntitySource) -> (Result<String>, Diagnostics) {
        let provider = provider();
        let entity = Entity {
            provider: &provider,
            kind,
            name: "edgenext_cdn_domain",
            product: "CDN",
            source: src,
        };
        let mut diag = Diagnostics::new();
        let out = render_entity(&entity, &mut diag);
        (out, diag)
    }

    #[test]
    fn full_resource_document() {
        let schema = object(vec![
            ("domain", Field::new(Kind::String).required().force_new().describe("Domain name.")),
            ("cname", Field::new(Kind::String).computed().describe("CNAME.")),
        ]);
        let (out, diag) = render(EntityKind::Resource, &source(DESCRIPTION, schema));
        let expected = r#"---
subcategory: "CDN"
layout: "edgenext"
page_title: "EdgeNext: edgenext_cdn_domain"
description: |-
  Provides a CDN domain.
---

# edgenext_cdn_domain

Provides a CDN domain.

## Example Usage

### Basic usage

```
resource "edgenext_cdn_domain" "foo" {
  domain = "a.com"
}
```

## Argument Reference

The following arguments are supported:

* `domain` - (Required, String, ForceNew) Domain name.

## Attributes Reference

In addition to all arguments above, the following attributes are exported:

* `id` - ID of the resource.
* `cname` - CNAME.

## Import

terraform import edgenext_cdn_domain.foo a.com
"#;
        assert_eq!(out.unwrap(), expected);
        assert!(diag.is_empty());
    }

    #[test]
    fn data_source_has_no_id_and_no_import() {
        let schema = object(vec![(
            "domains",
            Field::new(Kind::List)
                .computed()
                .describe("Domains.")
                .elem(Element::Object(object(vec![(
                    "name",
                    Field::new(Kind::String).computed().describe("Name."),
                )]))),
        )]);
        let text = "Lists domains.\n\nExample Usage\n\n```hcl\ndata \"edgenext_cdn_domains\" \"all\" {}\n```";
        let (out, _) = render(EntityKind::DataSource, &source(text, schema));
        let out = out.unwrap();
        assert!(!out.contains("`id`"));
        assert!(!out.contains("## Import"));
        assert!(!out.contains("## Argument Reference"));
        assert!(out.contains("* `domains` - Domains.\n  * `name` - Name.\n"));
    }

    #[test]
    fn substructures_follow_arguments() {
        let schema = object(vec![
            ("domain", Field::new(Kind::String).required().describe("Domain.")),
            (
                "origin",
                Field::new(Kind::List)
                    .required()
                    .describe("Origin.")
                    .elem(Element::Object(object(vec![(
                        "address",
                        Field::new(Kind::String).required().describe("Address."),
                    )]))),
            ),
        ]);
        let (out, _) = render(EntityKind::Resource, &source(DESCRIPTION, schema));
        assert!(out.unwrap().contains(
            "* `domain` - (Required, String) Domain.\n\
             * `origin` - (Required, List: [`origin`]) Origin.\n\n\
             The `origin` object supports the following:\n\n\
             * `address` - (Required, String) Address.\n"
        ));
    }

    #[test]
    fn multi_line_short_description_is_indented() {
        let text = "Line one\nline two.\n\nMore.\n\nExample Usage\n\n```\na = 1\n```";
        let (out, _) = render(EntityKind::Resource, &source(text, Object::default()));
        assert!(out.unwrap().contains("description: |-\n  Line one\n  line two.\n---"));
    }

    #[test]
    fn missing_example_usage_is_fatal() {
        let (out, _) = render(EntityKind::Resource, &source("Just text.", Object::default()));
        assert!(matches!(out.unwrap_err(), Error::MissingExampleUsage { .. }));
    }

    #[test]
    fn empty_description_is_fatal() {
        let (out, _) = render(EntityKind::Resource, &source("   ", Object::default()));
        assert!(matches!(out.unwrap_err(), Error::EmptyDescription { .. }));
    }

    #[test]
    fn example_without_code_is_fatal() {
        let text = "Desc.\n\nExample Usage\n\nNo code here.";
        let (out, _) = render(EntityKind::Resource, &source(text, Object::default()));
        assert!(matches!(out.unwrap_err(), Error::MissingCodeBlock { .. }));
    }

    #[test]
    fn warnings_are_returned() {
        let schema = object(vec![("domain", Field::new(Kind::String).required())]);
        let (out, diag) = render(EntityKind::Resource, &source(DESCRIPTION, schema));
        assert!(out.unwrap().contains("* `domain` - (Required, String)\n"));
        assert_eq!(
            diag.warnings(),
            &[Warning::MissingDescription {
                entity: "edgenext_cdn_domain".into(),
                field: "domain".into(),
            }]
        );
    }
}
