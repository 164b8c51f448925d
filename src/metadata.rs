//! Document head metadata: title, description and the social-preview tags.
//! The strings are emitted verbatim, by the server into the HTML shell and by
//! the browser for anything the shell is missing.

pub const TITLE: &str = "Gamid Muratbekov - Full-Stack Software Engineer";
pub const DESCRIPTION: &str = "Gamid Muratbekov, a full-stack engineer building performant apps, from low-level C++ systems to cross-platform mobile tools.";
pub const SITE_URL: &str = "https://gamid.dev";
pub const SITE_NAME: &str = "Gamid Muratbekov";
pub const FAVICON_PATH: &str = "/favicon.ico";

const OG_DESCRIPTION: &str = "Explore the portfolio of Gamid Muratbekov: developer of scalable platforms, open-source projects, and cross-platform apps.";
const OG_IMAGE: &str = "https://gamid.dev/og.png";
const OG_IMAGE_WIDTH: &str = "1200";
const OG_IMAGE_HEIGHT: &str = "630";
const OG_IMAGE_ALT: &str = "Gamid Muratbekov - Portfolio Preview";
const TWITTER_DESCRIPTION: &str = "Developer of high-performance systems and open-source projects.";

/// Which attribute identifies a `<meta>` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

impl MetaKey {
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Property(_) => "property",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Name(value) | Self::Property(value) => value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    fn new(key: MetaKey, content: &str) -> Self {
        Self {
            key,
            content: content.to_string(),
        }
    }
}

/// All `<meta>` tags for the page. `site_url` becomes `og:url`.
pub fn head_tags(site_url: &str) -> Vec<MetaTag> {
    vec![
        MetaTag::new(MetaKey::Name("description"), DESCRIPTION),
        MetaTag::new(MetaKey::Property("og:title"), TITLE),
        MetaTag::new(MetaKey::Property("og:description"), OG_DESCRIPTION),
        MetaTag::new(MetaKey::Property("og:url"), site_url),
        MetaTag::new(MetaKey::Property("og:site_name"), SITE_NAME),
        MetaTag::new(MetaKey::Property("og:image"), OG_IMAGE),
        MetaTag::new(MetaKey::Property("og:image:width"), OG_IMAGE_WIDTH),
        MetaTag::new(MetaKey::Property("og:image:height"), OG_IMAGE_HEIGHT),
        MetaTag::new(MetaKey::Property("og:image:alt"), OG_IMAGE_ALT),
        MetaTag::new(MetaKey::Property("og:type"), "website"),
        MetaTag::new(MetaKey::Name("twitter:card"), "summary_large_image"),
        MetaTag::new(MetaKey::Name("twitter:title"), TITLE),
        MetaTag::new(MetaKey::Name("twitter:description"), TWITTER_DESCRIPTION),
        MetaTag::new(MetaKey::Name("twitter:image"), OG_IMAGE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn og_url_follows_site_url() {
        let tags = head_tags("https://example.test/");
        let og_url = tags
            .iter()
            .find(|tag| tag.key == MetaKey::Property("og:url"))
            .expect("og:url is emitted");

        assert_eq!(og_url.content, "https://example.test/");
    }

    #[test]
    fn tag_keys_are_unique() {
        let tags = head_tags(SITE_URL);
        for (index, tag) in tags.iter().enumerate() {
            assert!(
                tags[index + 1..].iter().all(|other| other.key != tag.key),
                "duplicate {:?}",
                tag.key
            );
        }
    }

    #[test]
    fn key_attribute_matches_variant() {
        assert_eq!(MetaKey::Name("description").attribute(), "name");
        assert_eq!(MetaKey::Property("og:type").attribute(), "property");
        assert_eq!(MetaKey::Property("og:type").value(), "og:type");
    }
}
