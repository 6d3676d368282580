//! Argument/attribute classification.
//!
//! Every top-level field lands in exactly one bucket:
//! required arguments, optional arguments, or computed attributes.
//!
//! A missing description is treated differently per bucket: arguments are
//! still listed (with a warning), attributes are silently left out.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::model::{Field, Object, SubStructure};
use crate::render::substructure;

/// Entity being documented.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub entity: &'a str,
    /// Data sources are read-only: computed fields may not be force_new
    pub read_only: bool,
}

/// Classified, sorted lines of one schema.
#[derive(Debug, Default)]
pub struct Classified {
    pub required: Vec<String>,
    pub optional: Vec<String>,
    pub attributes: Vec<String>,
    /// Sorted and adjacent-deduplicated nested-object sections
    pub sub_structures: Vec<SubStructure>,
}

impl Classified {
    /// Required then optional argument lines.
    pub fn arguments(&self) -> Vec<String> {
        self.required.iter().chain(&self.optional).cloned().collect()
    }
}

/// Classify every top-level field of `schema`.
pub fn classify(schema: &Object, ctx: &Context, diag: &mut Diagnostics) -> Result<Classified> {
    let mut out = Classified::default();
    let mut sub_structures = Vec::new();

    for (name, field) in schema.iter() {
        validate(name, field, ctx)?;

        if field.required || field.optional {
            sub_structures.extend(substructure::extract(name, field, 0, None, ctx, diag)?);
            let line = argument_line(name, field, ctx, diag);
            if field.required {
                out.required.push(line);
            } else {
                out.optional.push(line);
            }
        } else if field.computed {
            out.attributes.extend(attribute_lines(name, field, 0, ctx)?);
        }
    }

    out.required.sort();
    out.required.dedup();
    out.optional.sort();
    out.optional.dedup();
    out.attributes.sort();
    out.sub_structures = substructure::sort(sub_structures);
    Ok(out)
}

/// Reject flag combinations that cannot be documented.
pub(crate) fn validate(name: &str, field: &Field, ctx: &Context) -> Result<()> {
    if field.required && field.optional {
        return Err(Error::RequiredAndOptional {
            entity: ctx.entity.to_string(),
            field: name.to_string(),
        });
    }
    if ctx.read_only && field.computed && field.force_new {
        return Err(Error::ForceNewOnComputed {
            entity: ctx.entity.to_string(),
            field: name.to_string(),
        });
    }
    Ok(())
}

/// Type column: `String`, `Set: [`String`]`, `List: [`rules`]`.
pub(crate) fn type_annotation(name: &str, field: &Field) -> String {
    let token = field.kind.token();
    if field.nested().is_some() {
        return format!("{}: [`{}`]", token, name);
    }
    match field.scalar_elem().map(|kind| kind.token()) {
        Some(elem) if !elem.is_empty() => format!("{}: [`{}`]", token, elem),
        _ => token.to_string(),
    }
}

/// `` * `name` - (Required, String, ForceNew) description ``
///
/// The field must be required or optional.
pub(crate) fn argument_line(
    name: &str,
    field: &Field,
    ctx: &Context,
    diag: &mut Diagnostics,
) -> String {
    let mut opts: Vec<String> = Vec::new();
    opts.push(if field.required { "Required" } else { "Optional" }.to_string());

    let annotation = type_annotation(name, field);
    if !annotation.is_empty() {
        opts.push(annotation);
    }
    if field.force_new {
        opts.push("ForceNew".to_string());
    }

    let mut description = field.description.trim().to_string();
    if description.is_empty() {
        diag.warn(Warning::MissingDescription {
            entity: ctx.entity.to_string(),
            field: name.to_string(),
        });
    }
    if field.is_deprecated() {
        opts.push("**Deprecated**".to_string());
        diag.warn(Warning::Deprecated {
            entity: ctx.entity.to_string(),
            field: name.to_string(),
        });
        description = format!("{} {}", field.deprecated.trim(), description)
            .trim()
            .to_string();
    }

    format!("* `{}` - ({}) {}", name, opts.join(", "), description)
        .trim_end()
        .to_string()
}

/// `` * `name` - description ``, with nested children indented below it
/// when the field holds an object. Fields without a description yield
/// nothing.
pub(crate) fn attribute_lines(
    name: &str,
    field: &Field,
    step: usize,
    ctx: &Context,
) -> Result<Vec<String>> {
    let description = field.description.trim();
    if description.is_empty() {
        return Ok(Vec::new());
    }

    let indent = "  ".repeat(step);
    let mut line = format!("{}* `{}` - {}", indent, name, description);

    if let Some(object) = field.nested() {
        let mut children = Vec::new();
        for (child_name, child) in object.iter() {
            validate(child_name, child, ctx)?;
            children.extend(attribute_lines(child_name, child, step + 1, ctx)?);
        }
        children.sort();
        if !children.is_empty() {
            line.push('\n');
            line.push_str(&children.join("\n"));
        }
    }

    Ok(vec![line])
}
