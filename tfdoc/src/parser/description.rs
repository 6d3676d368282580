//! Splits an entity description into its free-form text, `Import` section
//! and `Example Usage` section.
//!
//! A section marker is a line holding exactly the marker text, preceded by a
//! blank line. Only the first occurrence of each marker counts; sections may
//! appear in either order and each runs until the next marker or the end.

use regex::Regex;
use std::sync::LazyLock;

pub const IMPORT_MARKER: &str = "Import";
pub const EXAMPLE_MARKER: &str = "Example Usage";

static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\r?\n[ \t]*(Import|Example Usage)[ \t]*\r?$").unwrap()
});

static RE_BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\r?\n").unwrap());

/// Description text broken into its sections, all trimmed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Sections<'a> {
    pub description: &'a str,
    pub import: Option<&'a str>,
    pub example: Option<&'a str>,
}

pub fn split(text: &str) -> Sections<'_> {
    // (marker, start of the blank line before it, end of the marker line)
    let mut markers: Vec<(&str, usize, usize)> = Vec::new();
    for caps in RE_MARKER.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if markers.iter().all(|(seen, _, _)| *seen != name.as_str()) {
            markers.push((name.as_str(), whole.start(), whole.end()));
        }
    }

    let description_end = markers.first().map(|m| m.1).unwrap_or(text.len());
    let mut sections = Sections {
        description: text[..description_end].trim(),
        ..Default::default()
    };

    for (i, (name, _, body_start)) in markers.iter().enumerate() {
        let body_end = markers.get(i + 1).map(|m| m.1).unwrap_or(text.len());
        let body = text[*body_start..body_end].trim();
        if *name == IMPORT_MARKER {
            sections.import = Some(body);
        } else if *name == EXAMPLE_MARKER {
            sections.example = Some(body);
        }
    }

    sections
}

/// Text up to the first blank line, or the whole description.
pub fn short_description(description: &str) -> &str {
    match RE_BLANK_LINE.find(description) {
        Some(m) => description[..m.start()].trim(),
        None => description.trim(),
    }
}
