//! Whole-provider generation: index → entity pages → landing page and
//! navigation index, plus writing and checking the output tree.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::model::{EntityKind, Product, Provider, RenderedDoc};
use crate::parser::index;
use crate::render::document::{render_entity, Entity};
use crate::render::index::{render_landing, render_sidebar, LANDING_PATH, SIDEBAR_PATH};
use crate::render::doc_path;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Rendered documents plus the warnings collected while rendering them.
#[derive(Debug)]
pub struct Generation {
    pub docs: Vec<RenderedDoc>,
    pub diagnostics: Diagnostics,
}

/// Render every document of `provider`. Nothing is written.
pub fn generate(provider: &Provider) -> Result<Generation> {
    let mut diag = Diagnostics::new();
    let products = index::parse(&provider.index, &provider.namespace)?;
    let products = documented_products(provider, products, &mut diag);

    // (kind, entity) → product name
    let mut owners: BTreeMap<(EntityKind, &str), &str> = BTreeMap::new();
    for product in &products {
        let listed = product
            .resources
            .iter()
            .map(|name| (EntityKind::Resource, name))
            .chain(
                product
                    .data_sources
                    .iter()
                    .map(|name| (EntityKind::DataSource, name)),
            );
        for (kind, name) in listed {
            if let Some(first) = owners.insert((kind, name.as_str()), product.name.as_str()) {
                return Err(Error::DuplicateIndexEntry {
                    name: name.clone(),
                    kind: kind.label(),
                    first: first.to_string(),
                    second: product.name.clone(),
                });
            }
        }
    }

    let entities = provider
        .resources
        .iter()
        .map(|(name, source)| (EntityKind::Resource, name, source))
        .chain(
            provider
                .data_sources
                .iter()
                .map(|(name, source)| (EntityKind::DataSource, name, source)),
        );

    let mut docs = Vec::new();
    for (kind, name, source) in entities {
        let Some(product) = owners.get(&(kind, name.as_str())).copied() else {
            return Err(Error::NotIndexed {
                entity: name.clone(),
                kind: kind.label(),
            });
        };
        debug!(entity = %name, product, "rendering {}", kind.label());

        let entity = Entity {
            provider,
            kind,
            name,
            product,
            source,
        };
        docs.push(RenderedDoc {
            path: PathBuf::from(doc_path(provider, product, kind, name)),
            content: render_entity(&entity, &mut diag)?,
        });
    }

    docs.push(RenderedDoc {
        path: PathBuf::from(SIDEBAR_PATH),
        content: render_sidebar(provider, &products),
    });
    docs.push(RenderedDoc {
        path: PathBuf::from(LANDING_PATH),
        content: render_landing(provider, &products, &mut diag)?,
    });

    Ok(Generation {
        docs,
        diagnostics: diag,
    })
}

/// Drop index entries without a schema (with a warning) and products left
/// with nothing to document.
fn documented_products(
    provider: &Provider,
    products: Vec<Product>,
    diag: &mut Diagnostics,
) -> Vec<Product> {
    let mut keep = |kind: EntityKind, name: &String| {
        let known = provider.entity(kind, name).is_some();
        if !known {
            diag.warn(Warning::UnknownIndexEntry { name: name.clone() });
        }
        known
    };

    products
        .into_iter()
        .map(|mut product| {
            product.data_sources.retain(|n| keep(EntityKind::DataSource, n));
            product.resources.retain(|n| keep(EntityKind::Resource, n));
            product
        })
        .filter(|p| !p.resources.is_empty() || !p.data_sources.is_empty())
        .collect()
}

/// Write every document under `root`, creating directories as needed.
pub fn write_docs(root: &Path, docs: &[RenderedDoc]) -> Result<()> {
    for doc in docs {
        let path = root.join(&doc.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &doc.content).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "wrote document");
    }
    Ok(())
}

/// Documents under `root` that are missing or differ from `docs`.
pub fn stale_docs(root: &Path, docs: &[RenderedDoc]) -> Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    for doc in docs {
        let path = root.join(&doc.path);
        match fs::read_to_string(&path) {
            Ok(existing) if existing == doc.content => {}
            Ok(_) => stale.push(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => stale.push(path),
            Err(source) => return Err(Error::Read { path, source }),
        }
    }
    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
        "namespace": "edgenext",
        "title": "EdgeNext",
        "provider": { "description": "EdgeNext provider." },
        "index": "CDN\nResource\nedgenext_cdn_domain\nedgenext_cdn_ghost\nData Source\nedgenext_cdn_domains\n\nEmpty\nResource\nedgenext_nothing\n",
        "resources": {
            "edgenext_cdn_domain": {
                "description": "Provides a domain.\n\nExample Usage\n\n```hcl\nresource \"edgenext_cdn_domain\" \"a\" {}\n```",
                "schema": { "domain": { "type": "string", "required": true, "description": "Domain." } }
            }
        },
        "data_sources": {
            "edgenext_cdn_domains": {
                "description": "Lists domains.\n\nExample Usage\n\n```hcl\ndata \"edgenext_cdn_domains\" \"a\" {}\n```",
                "schema": {}
            }
        }
    }"#;

    fn provider() -> Provider {
        serde_json::from_str(MANIFEST).unwrap()
    }

    #[test]
    fn generates_all_documents() {
        let generation = generate(&provider()).unwrap();
        let paths: Vec<String> = generation
            .docs
            .iter()
            .map(|d| d.path.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(
            paths,
            vec![
                "cdn/r/cdn_domain.md",
                "cdn/d/cdn_domains.md",
                "_sidebar.md",
                "index.md"
            ]
        );
    }

    #[test]
    fn unknown_index_entries_warn_and_vanish() {
        let generation = generate(&provider()).unwrap();
        let warnings: Vec<String> = generation
            .diagnostics
            .warnings()
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("edgenext_cdn_ghost"));
        assert!(warnings[1].contains("edgenext_nothing"));

        let sidebar = &generation.docs[2].content;
        assert!(!sidebar.contains("ghost"));
        assert!(!sidebar.contains("Empty"));
    }

    #[test]
    fn entity_missing_from_index_is_fatal() {
        let mut p = provider();
        p.index = "CDN\nResource\nedgenext_cdn_domain\n".into();
        let err = generate(&p).unwrap_err();
        assert!(matches!(
            err,
            Error::NotIndexed { ref entity, kind: "data source" } if entity == "edgenext_cdn_domains"
        ));
    }

    #[test]
    fn entity_listed_under_wrong_kind_is_not_indexed() {
        let mut p = provider();
        p.index = "CDN\nResource\nedgenext_cdn_domain\nedgenext_cdn_domains\n".into();
        assert!(matches!(generate(&p).unwrap_err(), Error::NotIndexed { .. }));
    }

    #[test]
    fn entity_listed_under_two_products_is_fatal() {
        let mut p = provider();
        p.index = "One\nResource\nedgenext_cdn_domain\nData Source\nedgenext_cdn_domains\n\
                   Two\nResource\nedgenext_cdn_domain\n"
            .into();
        let err = generate(&p).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateIndexEntry { ref name, kind: "resource", ref first, ref second }
                if name == "edgenext_cdn_domain" && first == "One" && second == "Two"
        ));
        assert_eq!(
            err.to_string(),
            "index lists resource `edgenext_cdn_domain` under both `One` and `Two`"
        );
    }

    #[test]
    fn entity_repeated_within_a_product_is_fatal() {
        let mut p = provider();
        p.index = "CDN\nResource\nedgenext_cdn_domain\nedgenext_cdn_domain\n\
                   Data Source\nedgenext_cdn_domains\n"
            .into();
        assert!(matches!(
            generate(&p).unwrap_err(),
            Error::DuplicateIndexEntry { .. }
        ));
    }

    #[test]
    fn write_then_check_round() {
        let dir = TempDir::new().unwrap();
        let generation = generate(&provider()).unwrap();

        let stale = stale_docs(dir.path(), &generation.docs).unwrap();
        assert_eq!(stale.len(), generation.docs.len());

        write_docs(dir.path(), &generation.docs).unwrap();
        assert!(dir.path().join("cdn/r/cdn_domain.md").is_file());
        assert!(stale_docs(dir.path(), &generation.docs).unwrap().is_empty());

        fs::write(dir.path().join("index.md"), "edited").unwrap();
        let stale = stale_docs(dir.path(), &generation.docs).unwrap();
        assert_eq!(stale, vec![dir.path().join("index.md")]);
    }
}
