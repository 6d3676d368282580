//! GitHub-style slugs for product directories and relative links.

/// GitHub heading anchor slug.
///
/// - lowercase
/// - keep alphanumerics, spaces and hyphens; strip everything else
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Output directory name for a product group.
pub fn product_dir(product: &str) -> String {
    github_slug(product)
}

/// Markdown list item linking to a path relative to the docs root.
pub fn link_item(text: &str, target: &str) -> String {
    format!("* [{}]({})", text, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("Group A"), "group-a");
    }

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(github_slug("CDN (Content Delivery)"), "cdn-content-delivery");
        assert_eq!(github_slug("edgenext_cdn_domain"), "edgenextcdndomain");
    }

    #[test]
    fn slug_keeps_hyphens() {
        assert_eq!(github_slug("Anti-DDoS"), "anti-ddos");
    }

    #[test]
    fn product_dir_trims() {
        assert_eq!(product_dir("  SSL Certificate "), "ssl-certificate");
    }

    #[test]
    fn items() {
        assert_eq!(
            link_item("edgenext_x", "group-a/r/x.md"),
            "* [edgenext_x](group-a/r/x.md)"
        );
    }
}
