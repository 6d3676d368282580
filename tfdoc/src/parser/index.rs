//! Product index parser — line-by-line classification.
//!
//! The index is a flat listing:
//!
//! ```text
//! CDN
//!   Data Source
//!     edgenext_cdn_domains
//!   Resource
//!     edgenext_cdn_domain
//! ```
//!
//! Indentation is ignored. A line is a section header, an entity (prefixed
//! with `<namespace>_`), or else the name of a new product.

use crate::error::{Error, Result};
use crate::model::{EntityKind, Product};

pub const RESOURCE_HEADER: &str = "Resource";
pub const DATA_SOURCE_HEADER: &str = "Data Source";

#[derive(Default)]
struct ParserState {
    products: Vec<Product>,
    section: Option<EntityKind>,
}

// -- Public API ---------------------------------------------------------------

/// Parse the index listing into products, in source order.
pub fn parse(input: &str, namespace: &str) -> Result<Vec<Product>> {
    let prefix = format!("{}_", namespace);
    let mut state = ParserState::default();

    for (idx, line) in input.lines().enumerate() {
        process_line(&mut state, idx + 1, line.trim(), &prefix)?;
    }

    Ok(state.products)
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParserState, line_no: usize, line: &str, prefix: &str) -> Result<()> {
    if line.is_empty() {
        return Ok(());
    }

    // 1. Section headers
    let header = match line {
        RESOURCE_HEADER => Some(EntityKind::Resource),
        DATA_SOURCE_HEADER => Some(EntityKind::DataSource),
        _ => None,
    };
    if let Some(kind) = header {
        if s.products.is_empty() {
            return Err(Error::SectionWithoutProduct {
                line: line_no,
                header: line.to_string(),
            });
        }
        s.section = Some(kind);
        return Ok(());
    }

    // 2. Entity names
    if line.starts_with(prefix) {
        let Some(product) = s.products.last_mut() else {
            return Err(Error::EntityWithoutProduct {
                line: line_no,
                name: line.to_string(),
            });
        };
        match s.section {
            Some(EntityKind::Resource) => product.resources.push(line.to_string()),
            Some(EntityKind::DataSource) => product.data_sources.push(line.to_string()),
            None => {
                return Err(Error::EntityWithoutSection {
                    line: line_no,
                    name: line.to_string(),
                })
            }
        }
        return Ok(());
    }

    // 3. Anything else starts a new product
    s.products.push(Product {
        name: line.to_string(),
        ..Default::default()
    });
    s.section = None;
    Ok(())
}
