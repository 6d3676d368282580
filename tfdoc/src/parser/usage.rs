//! `Example Usage` parser — prose + fenced code pairs.
//!
//! The usage text is a sequence of `<prose> ```lang <code> ``` ` segments.
//! Each segment becomes a [`UsageBlock`]: the first prose line is the title,
//! the remaining prose the body, and the code is passed through the HCL
//! formatter.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::{Error, Result};
use crate::hclfmt;
use crate::model::UsageBlock;
use regex::Regex;
use std::sync::LazyLock;

static RE_FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*```[A-Za-z0-9_+-]*[^\n`]*$").unwrap());

static RE_FENCE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*```[ \t]*\r?$").unwrap());

/// Parse usage text into blocks, in source order.
///
/// With `require_code`, text without any fenced block is an error.
pub fn parse(
    text: &str,
    entity: &str,
    require_code: bool,
    diag: &mut Diagnostics,
) -> Result<Vec<UsageBlock>> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(open) = RE_FENCE_OPEN.find(rest) {
        let prose = &rest[..open.start()];
        let after_open = &rest[open.end()..];
        let Some(close) = RE_FENCE_CLOSE.find(after_open) else {
            return Err(Error::UnterminatedFence {
                entity: entity.to_string(),
            });
        };

        let (title, body) = split_prose(prose);
        blocks.push(UsageBlock {
            title: title.to_string(),
            body: body.to_string(),
            code: hclfmt::format(&after_open[..close.start()]),
        });
        rest = &after_open[close.end()..];
    }

    if !rest.trim().is_empty() {
        diag.warn(Warning::TrailingUsageProse {
            entity: entity.to_string(),
        });
    }

    if require_code && blocks.is_empty() {
        return Err(Error::MissingCodeBlock {
            entity: entity.to_string(),
        });
    }

    Ok(blocks)
}

/// First non-blank line is the title; everything after it is the body.
fn split_prose(prose: &str) -> (&str, &str) {
    let prose = prose.trim();
    match prose.split_once('\n') {
        Some((title, body)) => (title.trim(), body.trim()),
        None => (prose, ""),
    }
}

/// Render blocks as `### title`, body and a fenced code block each,
/// separated by a single blank line.
pub fn render(blocks: &[UsageBlock]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

fn render_block(block: &UsageBlock) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !block.title.is_empty() {
        parts.push(format!("### {}", block.title));
    }
    if !block.body.is_empty() {
        parts.push(block.body.clone());
    }
    parts.push(format!("```\n{}\n```", block.code));
    parts.join("\n\n")
}
