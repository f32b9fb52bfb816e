//! Static catalog of named output formats.
//!
//! Two disjoint registries exist: social-media sizes and marketing sizes.
//! Both are built once at first use and never mutated; callers either know
//! which registry an id belongs to or probe both via [`find_template`].

use crate::error::{TemplateError, TemplateResult};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named, fixed-dimension output target (e.g. "Instagram Post", 1080x1080).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Social platform the size targets, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Marketing collateral kind, when any.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Which layout pipeline a config routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Social,
    Marketing,
}

impl TemplateConfig {
    fn social(id: &str, name: &str, width: u32, height: u32, platform: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            width,
            height,
            platform: Some(platform.to_string()),
            kind: None,
        }
    }

    fn marketing(id: &str, name: &str, width: u32, height: u32, kind: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            width,
            height,
            platform: None,
            kind: Some(kind.to_string()),
        }
    }

    /// Tall, vertically-oriented canvases get story-specific scalars and
    /// placement.
    pub fn is_story(&self) -> bool {
        self.height as f32 >= self.width as f32 * 1.5
    }

    /// The smaller canvas dimension, which font and logo sizes scale from.
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height) as f32
    }

    /// Which pipeline a config belongs to: platform-tagged configs are
    /// social, kind-tagged configs are marketing, untagged configs default
    /// to social.
    pub fn layout_kind(&self) -> LayoutKind {
        if self.platform.is_none() && self.kind.is_some() {
            LayoutKind::Marketing
        } else {
            LayoutKind::Social
        }
    }
}

lazy_static! {
    /// Read-only catalog of social-media output sizes, keyed by id.
    pub static ref SOCIAL_MEDIA_SIZES: HashMap<&'static str, TemplateConfig> = {
        [
            ("instagram-post", TemplateConfig::social("instagram-post", "Instagram Post", 1080, 1080, "Instagram")),
            ("instagram-story", TemplateConfig::social("instagram-story", "Instagram Story", 1080, 1920, "Instagram")),
            ("facebook-post", TemplateConfig::social("facebook-post", "Facebook Post", 1200, 630, "Facebook")),
            ("x-post", TemplateConfig::social("x-post", "X Post", 1200, 675, "X")),
            ("linkedin-post", TemplateConfig::social("linkedin-post", "LinkedIn Post", 1200, 627, "LinkedIn")),
            ("youtube-thumbnail", TemplateConfig::social("youtube-thumbnail", "YouTube Thumbnail", 1280, 720, "YouTube")),
        ]
        .into_iter()
        .collect()
    };

    /// Read-only catalog of marketing collateral sizes, keyed by id.
    pub static ref MARKETING_SIZES: HashMap<&'static str, TemplateConfig> = {
        [
            ("flyer-letter", TemplateConfig::marketing("flyer-letter", "Flyer (Letter)", 2550, 3300, "Flyer")),
            ("poster", TemplateConfig::marketing("poster", "Poster", 2400, 3600, "Poster")),
            ("business-card", TemplateConfig::marketing("business-card", "Business Card", 1050, 600, "Business Card")),
            ("banner", TemplateConfig::marketing("banner", "Web Banner", 1500, 500, "Banner")),
            ("email-header", TemplateConfig::marketing("email-header", "Email Header", 1200, 400, "Email Header")),
            ("presentation", TemplateConfig::marketing("presentation", "Presentation Slide", 1920, 1080, "Presentation")),
        ]
        .into_iter()
        .collect()
    };
}

/// Look up a social-media size by id.
pub fn social_media_size(id: &str) -> TemplateResult<&'static TemplateConfig> {
    SOCIAL_MEDIA_SIZES
        .get(id)
        .ok_or_else(|| TemplateError::ConfigNotFound(id.to_string()))
}

/// Look up a marketing size by id.
pub fn marketing_size(id: &str) -> TemplateResult<&'static TemplateConfig> {
    MARKETING_SIZES
        .get(id)
        .ok_or_else(|| TemplateError::ConfigNotFound(id.to_string()))
}

/// Look up an id in both registries, social first.
pub fn find_template(id: &str) -> TemplateResult<&'static TemplateConfig> {
    social_media_size(id).or_else(|_| marketing_size(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_ids() {
        let post = social_media_size("instagram-post").unwrap();
        assert_eq!(post.width, 1080);
        assert_eq!(post.height, 1080);
        assert_eq!(post.platform.as_deref(), Some("Instagram"));

        let flyer = marketing_size("flyer-letter").unwrap();
        assert_eq!((flyer.width, flyer.height), (2550, 3300));
        assert_eq!(flyer.kind.as_deref(), Some("Flyer"));
    }

    #[test]
    fn unknown_id_is_config_not_found() {
        assert!(matches!(
            social_media_size("tiktok-post"),
            Err(TemplateError::ConfigNotFound(_))
        ));
        assert!(matches!(
            find_template("nope"),
            Err(TemplateError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn find_template_probes_both_registries() {
        assert!(find_template("instagram-story").is_ok());
        assert!(find_template("business-card").is_ok());
    }

    #[test]
    fn registries_are_disjoint() {
        for id in SOCIAL_MEDIA_SIZES.keys() {
            assert!(!MARKETING_SIZES.contains_key(id));
        }
    }

    #[test]
    fn story_detection_is_aspect_based() {
        assert!(social_media_size("instagram-story").unwrap().is_story());
        assert!(!social_media_size("instagram-post").unwrap().is_story());
        // Portrait marketing sizes count as tall canvases too
        assert!(marketing_size("poster").unwrap().is_story());
    }

    #[test]
    fn layout_kind_routes_by_tag() {
        assert_eq!(
            social_media_size("x-post").unwrap().layout_kind(),
            LayoutKind::Social
        );
        assert_eq!(
            marketing_size("banner").unwrap().layout_kind(),
            LayoutKind::Marketing
        );
        let untagged = TemplateConfig {
            id: "custom".into(),
            name: "Custom".into(),
            width: 800,
            height: 600,
            platform: None,
            kind: None,
        };
        assert_eq!(untagged.layout_kind(), LayoutKind::Social);
    }

    #[test]
    fn config_serde_round_trip_uses_type_key() {
        let flyer = marketing_size("flyer-letter").unwrap();
        let json = serde_json::to_string(flyer).unwrap();
        assert!(json.contains("\"type\":\"Flyer\""));
        let back: TemplateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, flyer);
    }
}
