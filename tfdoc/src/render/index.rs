//! Provider landing page and the navigation index.

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::model::{EntityKind, Product, Provider};
use crate::parser::{description, usage};
use crate::render::arguments::{self, Context};
use crate::render::document::arguments_body;
use crate::render::{assemble, doc_path, substitute};
use crate::slug;

pub const LANDING_PATH: &str = "index.md";
pub const SIDEBAR_PATH: &str = "_sidebar.md";

const PROVIDER_ENTITY: &str = "provider";

const LANDING_HEAD: &str = r#"---
layout: "${namespace}"
page_title: "Provider: ${title}"
description: |-
  The ${title} provider is used to interact with the many resources supported by ${title}. The provider needs to be configured with the proper credentials before it can be used.
---

# ${title} Provider
"#;

const LANDING_SECTIONS: &[(&str, &str)] = &[
    ("description", "${description}\n"),
    ("example", "## Example Usage\n\n${example}\n"),
    (
        "arguments",
        "## Argument Reference\n\nThe following arguments are supported:\n\n${arguments}\n",
    ),
    ("resources", "## Resources List\n\n${resources}\n"),
];

const SIDEBAR_HEAD: &str = "* [${title} Provider](index.md)\n";

/// Render the landing page: provider description, example, configuration
/// arguments and the per-product list of documents.
///
/// Unlike entity pages, the provider may omit `Example Usage`.
pub fn render_landing(
    provider: &Provider,
    products: &[Product],
    diag: &mut Diagnostics,
) -> Result<String> {
    let sections = description::split(provider.provider.description.trim());

    let example = match sections.example {
        Some(text) => usage::render(&usage::parse(text, PROVIDER_ENTITY, false, diag)?),
        None => String::new(),
    };

    let ctx = Context {
        entity: PROVIDER_ENTITY,
        read_only: false,
    };
    let classified = arguments::classify(&provider.provider.schema, &ctx, diag)?;
    let arguments = arguments_body(&classified);
    let resources = resources_list(provider, products);

    let vars = [
        ("namespace", provider.namespace.as_str()),
        ("title", provider.title.as_str()),
        ("description", sections.description),
        ("example", example.as_str()),
        ("arguments", arguments.as_str()),
        ("resources", resources.as_str()),
    ];
    Ok(assemble(LANDING_HEAD, LANDING_SECTIONS, &vars))
}

fn resources_list(provider: &Provider, products: &[Product]) -> String {
    let mut groups = Vec::new();
    for product in products {
        let mut lines = vec![format!("### {}", product.name)];
        for (kind, label, names) in [
            (EntityKind::DataSource, "Data Source", &product.data_sources),
            (EntityKind::Resource, "Resource", &product.resources),
        ] {
            if names.is_empty() {
                continue;
            }
            lines.push(String::new());
            lines.push(label.to_string());
            lines.push(String::new());
            for name in names {
                lines.push(slug::link_item(
                    name,
                    &doc_path(provider, &product.name, kind, name),
                ));
            }
        }
        groups.push(lines.join("\n"));
    }
    groups.join("\n\n")
}

/// Render the navigation index: products, then data sources and resources
/// beneath each.
pub fn render_sidebar(provider: &Provider, products: &[Product]) -> String {
    let mut output = substitute(SIDEBAR_HEAD, &[("title", provider.title.as_str())]);

    for product in products {
        output.push_str(&format!("* {}\n", product.name));
        for (kind, label, names) in [
            (EntityKind::DataSource, "Data Sources", &product.data_sources),
            (EntityKind::Resource, "Resources", &product.resources),
        ] {
            if names.is_empty() {
                continue;
            }
            output.push_str(&format!("  * {}\n", label));
            for name in names {
                let item = slug::link_item(name, &doc_path(provider, &product.name, kind, name));
                output.push_str(&format!("    {}\n", item));
            }
        }
    }

    output
}
