//! Canonical re-indentation of HCL example snippets.
//!
//! Not a full HCL parser: it tracks bracket depth outside strings, template
//! interpolations and comments, which is enough to normalize the layout of
//! documentation examples. Output is stable under repeated formatting.

use regex::Regex;
use std::sync::LazyLock;

const INDENT: &str = "  ";

// `key = value` on a single line; value checked separately for `==` / `=>`
static RE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^([A-Za-z_][A-Za-z0-9_-]*|"[^"]*")[ \t]*=[ \t]*(.*)$"#).unwrap()
});

static RE_HEREDOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<<-?[ \t]*([A-Za-z_][A-Za-z0-9_]*)[ \t]*$").unwrap());

#[derive(Debug)]
enum Line {
    Blank,
    /// Passed through untouched (heredoc bodies)
    Verbatim(String),
    Code {
        indent: usize,
        text: String,
        /// Single-line attribute eligible for `=` alignment
        attribute: Option<(String, String)>,
    },
}

/// Scanner context while walking one line.
#[derive(Debug, Clone, Copy)]
enum Ctx {
    Str,
    /// `${ ... }` inside a string, with the count of open braces
    Interp(u32),
}

/// Per-line scan result.
struct Scan {
    /// Net bracket change
    delta: i64,
    /// A `/*` was opened and not closed on this line
    opens_block_comment: bool,
}

/// Format an HCL snippet.
pub fn format(code: &str) -> String {
    let mut lines: Vec<Line> = Vec::new();
    let mut depth: usize = 0;
    let mut heredoc: Option<String> = None;
    let mut in_block_comment = false;

    for raw in code.lines() {
        let raw = raw.trim_end_matches('\r');

        if let Some(ref marker) = heredoc {
            if raw.trim() == marker.as_str() {
                heredoc = None;
            }
            lines.push(Line::Verbatim(raw.to_string()));
            continue;
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if !matches!(lines.last(), None | Some(Line::Blank)) {
                lines.push(Line::Blank);
            }
            continue;
        }

        if in_block_comment {
            if trimmed.contains("*/") {
                in_block_comment = false;
            }
            lines.push(Line::Code {
                indent: depth,
                text: trimmed.to_string(),
                attribute: None,
            });
            continue;
        }

        let leading_closers = trimmed
            .chars()
            .take_while(|c| matches!(c, '}' | ']' | ')'))
            .count();
        let indent = depth.saturating_sub(leading_closers);

        let scan = scan_line(trimmed);
        in_block_comment = scan.opens_block_comment;
        depth = (depth as i64 + scan.delta).max(0) as usize;

        let attribute = split_attribute(trimmed);
        let text = match attribute {
            Some((ref key, ref value)) => join_attribute(key, value, 0),
            None => normalize_block_header(trimmed),
        };
        // Only attributes that stay on one line take part in alignment
        let attribute = if scan.delta == 0 && !scan.opens_block_comment {
            attribute
        } else {
            None
        };

        if let Some(caps) = RE_HEREDOC.captures(trimmed) {
            heredoc = Some(caps[1].to_string());
        }

        lines.push(Line::Code {
            indent,
            text,
            attribute,
        });
    }

    align_attributes(&mut lines);

    let rendered: Vec<String> = lines
        .iter()
        .map(|line| match line {
            Line::Blank => String::new(),
            Line::Verbatim(text) => text.clone(),
            Line::Code { indent, text, .. } => format!("{}{}", INDENT.repeat(*indent), text),
        })
        .collect();

    rendered.join("\n").trim_matches('\n').to_string()
}

/// Walk a trimmed line, counting brackets that are not inside strings,
/// interpolations or comments.
fn scan_line(line: &str) -> Scan {
    let chars: Vec<char> = line.chars().collect();
    let mut stack: Vec<Ctx> = Vec::new();
    let mut delta: i64 = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        match stack.last().copied() {
            None => match c {
                '"' => stack.push(Ctx::Str),
                '#' => break,
                '/' if next == Some('/') => break,
                '/' if next == Some('*') => {
                    // Skip to the matching close on this line, if any
                    let rest: String = chars[i + 2..].iter().collect();
                    match rest.find("*/") {
                        Some(pos) => {
                            i += 2 + rest[..pos].chars().count() + 2;
                            continue;
                        }
                        None => {
                            return Scan {
                                delta,
                                opens_block_comment: true,
                            }
                        }
                    }
                }
                '{' | '[' | '(' => delta += 1,
                '}' | ']' | ')' => delta -= 1,
                _ => {}
            },
            Some(Ctx::Str) => match c {
                '\\' => i += 1,
                '"' => {
                    stack.pop();
                }
                '$' | '%' if next == Some('{') => {
                    stack.push(Ctx::Interp(0));
                    i += 1;
                }
                _ => {}
            },
            Some(Ctx::Interp(open)) => match c {
                '"' => stack.push(Ctx::Str),
                '{' => {
                    stack.pop();
                    stack.push(Ctx::Interp(open + 1));
                }
                '}' => {
                    stack.pop();
                    if open > 0 {
                        stack.push(Ctx::Interp(open - 1));
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }

    Scan {
        delta,
        opens_block_comment: false,
    }
}

/// Split `key = value`, rejecting comparison and arrow operators.
fn split_attribute(line: &str) -> Option<(String, String)> {
    let caps = RE_ATTRIBUTE.captures(line)?;
    let value = caps[2].trim_end();
    if value.starts_with('=') || value.starts_with('>') {
        return None;
    }
    Some((caps[1].to_string(), value.to_string()))
}

fn join_attribute(key: &str, value: &str, width: usize) -> String {
    format!("{:<width$} = {}", key, value, width = width)
        .trim_end()
        .to_string()
}

/// `resource "a" "b"{` → `resource "a" "b" {`
fn normalize_block_header(line: &str) -> String {
    let Some(head) = line.strip_suffix('{') else {
        return line.to_string();
    };
    let head = head.trim_end();
    match head.chars().last() {
        Some(c) if c == '"' || c.is_alphanumeric() || c == '_' => format!("{} {{", head),
        _ => line.to_string(),
    }
}

/// Pad keys so `=` lines up across runs of consecutive single-line
/// attributes at the same indentation.
fn align_attributes(lines: &mut [Line]) {
    let mut start = 0;
    while start < lines.len() {
        let Some(group_indent) = attribute_indent(&lines[start]) else {
            start += 1;
            continue;
        };
        let mut end = start + 1;
        while end < lines.len() && attribute_indent(&lines[end]) == Some(group_indent) {
            end += 1;
        }

        let width = lines[start..end]
            .iter()
            .filter_map(|line| match line {
                Line::Code {
                    attribute: Some((key, _)),
                    ..
                } => Some(key.chars().count()),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        for line in &mut lines[start..end] {
            if let Line::Code {
                text,
                attribute: Some((key, value)),
                ..
            } = line
            {
                *text = join_attribute(key, value, width);
            }
        }
        start = end;
    }
}

fn attribute_indent(line: &Line) -> Option<usize> {
    match line {
        Line::Code {
            indent,
            attribute: Some(_),
            ..
        } => Some(*indent),
        _ => None,
    }
}
