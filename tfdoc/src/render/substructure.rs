//! Nested-object sections: extraction and hierarchical ordering.

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::model::{Field, SubStructure};
use crate::render::arguments::{argument_line, validate, Context};
use std::collections::BTreeSet;

/// Collect a section for `field`'s nested object (if it has one) followed by
/// the sections of every nested object below it.
///
/// Only argument children (required/optional) are listed and descended into;
/// computed-only children belong to the attribute list.
pub fn extract(
    name: &str,
    field: &Field,
    depth: usize,
    parent: Option<&str>,
    ctx: &Context,
    diag: &mut Diagnostics,
) -> Result<Vec<SubStructure>> {
    let Some(object) = field.nested() else {
        return Ok(Vec::new());
    };

    let mut required = Vec::new();
    let mut optional = Vec::new();
    let mut below = Vec::new();

    for (child_name, child) in object.iter() {
        validate(child_name, child, ctx)?;
        if !(child.required || child.optional) {
            continue;
        }
        let line = argument_line(child_name, child, ctx, diag);
        if child.required {
            required.push(line);
        } else {
            optional.push(line);
        }
        below.extend(extract(child_name, child, depth + 1, Some(name), ctx, diag)?);
    }

    required.sort();
    optional.sort();
    required.extend(optional);

    let mut sections = vec![SubStructure {
        name: name.to_string(),
        parent: parent.map(str::to_string),
        depth,
        lines: required,
    }];
    sections.extend(below);
    Ok(sections)
}

/// Ordering bucket; declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Tier {
    /// Depth 0: objects held directly by the entity
    Root,
    /// Children of a root object
    KnownChildren,
    Other,
}

fn tier(section: &SubStructure, known_parents: &BTreeSet<&str>) -> Tier {
    match section.parent.as_deref() {
        _ if section.depth == 0 => Tier::Root,
        Some(parent) if known_parents.contains(parent) => Tier::KnownChildren,
        _ => Tier::Other,
    }
}

/// Order sections root → known children → other, each tier sorted by its
/// full text, then drop duplicates.
///
/// Duplicates are removed with a single adjacent-pair scan, so identical
/// sections that end up in different tiers both survive.
pub fn sort(sections: Vec<SubStructure>) -> Vec<SubStructure> {
    let known_parents: BTreeSet<&str> = sections
        .iter()
        .filter(|s| s.depth == 0)
        .map(|s| s.name.as_str())
        .collect();

    let mut keyed: Vec<(Tier, String, &SubStructure)> = sections
        .iter()
        .map(|s| (tier(s, &known_parents), s.render(), s))
        .collect();
    keyed.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
    keyed.dedup_by(|a, b| a.1 == b.1);

    keyed.into_iter().map(|(_, _, s)| s.clone()).collect()
}
