//! Typed rendering input supplied by the brand data provider.

use crate::color::darken;
use serde::{Deserialize, Serialize};

/// The logo asset reference. At most one source is authoritative: a URL to a
/// raster/vector file, or inline SVG markup. Both absent means the
/// placeholder tile is rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

/// A single font selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontChoice {
    pub family: String,
}

impl Default for FontChoice {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
        }
    }
}

/// Heading and body typography.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Typography {
    #[serde(default)]
    pub heading: FontChoice,
    #[serde(default)]
    pub body: FontChoice,
}

fn default_show_logo() -> bool {
    true
}

/// The rendering input: brand colors, text, logo, and typography.
///
/// Supplied fresh per call and never mutated by the engine. Defaulting rules
/// live in the accessors, so optional fields keep their absence visible to
/// the pipelines that need it (the marketing header derives a different
/// secondary shade than the social gradient).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElements {
    /// Required background hex color.
    pub background: String,
    /// Optional secondary hex color; see [`TemplateElements::secondary_color_or`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    /// Heading text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Supporting text below the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    /// Whether to draw the logo (default true).
    #[serde(default = "default_show_logo")]
    pub show_logo: bool,
}

impl TemplateElements {
    /// New elements with the required background color and defaults
    /// everywhere else.
    pub fn new(background: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            secondary_color: None,
            text: None,
            subtext: None,
            logo: None,
            typography: None,
            brand_name: None,
            show_logo: true,
        }
    }

    pub fn with_secondary_color(mut self, color: impl Into<String>) -> Self {
        self.secondary_color = Some(color.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    pub fn with_logo(mut self, logo: LogoSource) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = Some(typography);
        self
    }

    pub fn with_brand_name(mut self, name: impl Into<String>) -> Self {
        self.brand_name = Some(name.into());
        self
    }

    pub fn with_show_logo(mut self, show: bool) -> Self {
        self.show_logo = show;
        self
    }

    /// The explicit secondary color, or the background darkened by
    /// `darken_pct` percent when absent. The social gradient uses 20, the
    /// marketing header 15.
    pub fn secondary_color_or(&self, darken_pct: f32) -> String {
        self.secondary_color
            .clone()
            .unwrap_or_else(|| darken(&self.background, darken_pct))
    }

    /// Heading font family, defaulting to the generic sans-serif.
    pub fn heading_family(&self) -> &str {
        self.typography
            .as_ref()
            .map(|t| t.heading.family.as_str())
            .unwrap_or("sans-serif")
    }

    /// Body font family, defaulting to the generic sans-serif.
    pub fn body_family(&self) -> &str {
        self.typography
            .as_ref()
            .map(|t| t.body.family.as_str())
            .unwrap_or("sans-serif")
    }

    /// First uppercase character of the brand name, for the placeholder
    /// tile. Defaults to 'B'.
    pub fn brand_initial(&self) -> char {
        self.brand_name
            .as_deref()
            .and_then(|name| name.trim().chars().next())
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('B')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_color_defaults_to_darkened_background() {
        let elements = TemplateElements::new("#808080");
        // 20% -> 51 per channel
        assert_eq!(elements.secondary_color_or(20.0), "#4D4D4D");
        // An explicit secondary wins regardless of the percentage
        let elements = elements.with_secondary_color("#123456");
        assert_eq!(elements.secondary_color_or(15.0), "#123456");
    }

    #[test]
    fn typography_defaults_to_sans_serif() {
        let elements = TemplateElements::new("#000000");
        assert_eq!(elements.heading_family(), "sans-serif");
        assert_eq!(elements.body_family(), "sans-serif");

        let elements = elements.with_typography(Typography {
            heading: FontChoice {
                family: "Inter".into(),
            },
            body: FontChoice::default(),
        });
        assert_eq!(elements.heading_family(), "Inter");
        assert_eq!(elements.body_family(), "sans-serif");
    }

    #[test]
    fn brand_initial_uppercases_and_defaults() {
        assert_eq!(TemplateElements::new("#000").brand_initial(), 'B');
        assert_eq!(
            TemplateElements::new("#000")
                .with_brand_name("acme co")
                .brand_initial(),
            'A'
        );
        assert_eq!(
            TemplateElements::new("#000")
                .with_brand_name("  ")
                .brand_initial(),
            'B'
        );
    }

    #[test]
    fn show_logo_defaults_true_in_json() {
        let parsed: TemplateElements =
            serde_json::from_str(r##"{"background": "#3B82F6"}"##).unwrap();
        assert!(parsed.show_logo);
        assert!(parsed.logo.is_none());

        let parsed: TemplateElements = serde_json::from_str(
            r##"{"background": "#3B82F6", "showLogo": false, "brandName": "Acme"}"##,
        )
        .unwrap();
        assert!(!parsed.show_logo);
        assert_eq!(parsed.brand_name.as_deref(), Some("Acme"));
    }
}
