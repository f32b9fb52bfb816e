//! brandgen-rs: brand template rendering engine.
//!
//! Composes branded raster images (social-media posts, marketing collateral)
//! from a typed description of brand assets: colors, logo, typography, and
//! text. Rendering happens on the [`brandgen_canvas2d`] surface; output is
//! encoded PNG or JPEG bytes plus an embeddable data URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use brandgen_rs::{
//!     templates::social_media_size, OutputFormat, TemplateElements, TemplateGenerator,
//! };
//!
//! let generator = TemplateGenerator::new();
//! let config = social_media_size("instagram-post")?;
//! let elements = TemplateElements::new("#3B82F6").with_text("Sale Today");
//! let template = generator
//!     .generate_social_media_template(config, &elements, OutputFormat::Png)
//!     .await?;
//! assert_eq!(template.width, 1080);
//! ```

pub mod color;
pub mod elements;
pub mod encode;
pub mod error;
pub mod generator;
pub mod layout;
pub mod logo;
pub mod style;
pub mod templates;
pub mod text;

pub use elements::{FontChoice, LogoSource, TemplateElements, Typography};
pub use encode::{GeneratedTemplate, OutputFormat};
pub use error::{TemplateError, TemplateResult};
pub use generator::{save_template, TemplateGenerator};
pub use style::StyleConfig;
pub use templates::{
    find_template, marketing_size, social_media_size, TemplateConfig, MARKETING_SIZES,
    SOCIAL_MEDIA_SIZES,
};
