// src/services/url_normalizer.rs
//
// URL Normalizer - rewrites share-style links into embeddable ones
//
// RULES:
// - One known rewrite: cloud-drive "view" link → direct "preview" link
// - Best-effort: a non-matching url is returned unchanged
// - Never fails
// - Idempotent: the preview form no longer matches the view pattern

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

const DRIVE_HOST: &str = "drive.google.com";
const DRIVE_PREVIEW_BASE: &str = "https://drive.google.com/uc?export=preview&id=";

static DEFAULT_NORMALIZER: LazyLock<UrlNormalizer> = LazyLock::new(UrlNormalizer::default);

/// Normalize with the default rewrite rule
pub fn normalize(url: &str) -> String {
    DEFAULT_NORMALIZER.normalize(url)
}

pub struct UrlNormalizer {
    /// Captures the file id of `.../d/<FILE_ID>/view...`
    drive_view_pattern: Regex,
}

impl Default for UrlNormalizer {
    fn default() -> Self {
        Self {
            drive_view_pattern: Regex::new(r"/d/([^/?#]+)/view(?:[/?#]|$)").unwrap(),
        }
    }
}

impl UrlNormalizer {
    pub fn normalize(&self, url: &str) -> String {
        match self.drive_file_id(url) {
            Some(file_id) => {
                let preview = format!("{}{}", DRIVE_PREVIEW_BASE, file_id);
                debug!("Rewrote drive view link {} → {}", url, preview);
                preview
            }
            None => url.to_string(),
        }
    }

    /// File id of a drive "view" link, if `url` is one
    pub fn drive_file_id<'a>(&self, url: &'a str) -> Option<&'a str> {
        if !url.contains(DRIVE_HOST) {
            return None;
        }
        self.drive_view_pattern
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|file_id| file_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_drive_view_link() {
        assert_eq!(
            normalize("https://drive.google.com/file/d/ABC123/view"),
            "https://drive.google.com/uc?export=preview&id=ABC123"
        );
    }

    #[test]
    fn test_rewrites_drive_view_link_with_query() {
        assert_eq!(
            normalize("https://drive.google.com/file/d/1a-B_c9/view?usp=sharing"),
            "https://drive.google.com/uc?export=preview&id=1a-B_c9"
        );
        assert_eq!(
            normalize("https://drive.google.com/file/d/XYZ/view/"),
            "https://drive.google.com/uc?export=preview&id=XYZ"
        );
    }

    #[test]
    fn test_idempotent() {
        let urls = [
            "https://drive.google.com/file/d/ABC123/view",
            "https://drive.google.com/file/d/ABC123/view?usp=drive_link",
            "https://example.com/video.mp4",
        ];
        for url in urls {
            let once = normalize(url);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_non_matching_urls_pass_through() {
        let urls = [
            "https://example.com/file/d/ABC123/view",
            "https://drive.google.com/file/d/ABC123/edit",
            "https://drive.google.com/open?id=ABC123",
            "https://drive.google.com/uc?export=preview&id=ABC123",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "not a url at all",
            "",
        ];
        for url in urls {
            assert_eq!(normalize(url), url);
        }
    }

    #[test]
    fn test_drive_file_id() {
        let normalizer = UrlNormalizer::default();
        assert_eq!(
            normalizer.drive_file_id("https://drive.google.com/file/d/F00/view"),
            Some("F00")
        );
        assert_eq!(normalizer.drive_file_id("https://drive.google.com/"), None);
    }
}
