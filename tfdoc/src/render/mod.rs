//! Renderer module — template substitution and document assembly.

pub mod arguments;
pub mod document;
pub mod index;
pub mod substructure;

use crate::model::{EntityKind, Provider};
use crate::slug;
use regex::Regex;
use std::sync::LazyLock;

static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([a-z_]+)\}").unwrap());

/// Template variables, looked up by placeholder name.
pub type Vars<'a> = [(&'a str, &'a str)];

/// Replace every `${key}` with its value in a single pass.
///
/// Substituted values are never rescanned, so `${...}` inside example code
/// survives. Unknown keys are left as written.
pub fn substitute(template: &str, vars: &Vars) -> String {
    RE_PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| {
            lookup(vars, &caps[1])
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn lookup<'a>(vars: &Vars<'a>, key: &str) -> Option<&'a str> {
    vars.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Render `head`, then each `(key, template)` section whose variable is
/// non-empty, separated by blank lines.
pub fn assemble(head: &str, sections: &[(&str, &str)], vars: &Vars) -> String {
    let mut output = substitute(head, vars);
    for (key, template) in sections {
        if lookup(vars, key).is_some_and(|v| !v.trim().is_empty()) {
            output.push('\n');
            output.push_str(&substitute(template, vars));
        }
    }
    output
}

/// Path of an entity document relative to the docs root:
/// `<product-dir>/<r|d>/<short-name>.md`.
pub fn doc_path(provider: &Provider, product: &str, kind: EntityKind, name: &str) -> String {
    format!(
        "{}/{}/{}.md",
        slug::product_dir(product),
        kind.dir(),
        provider.short_name(name)
    )
}

/// Indent continuation lines for a YAML `|-` block scalar.
pub fn yaml_block(text: &str) -> String {
    text.replace('\n', "\n  ")
}
