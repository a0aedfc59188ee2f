use crate::catalog::CatalogError;
use crate::data::ShowcaseEntry;
use crate::layout::LayoutConfig;

/// Error type for building a gallery from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "toml")]
    #[error("invalid gallery config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Page heading drawn above the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Heading {
    /// Leading plain text
    pub text: String,
    /// Accent-colored suffix
    pub highlight: Option<String>,
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            text: "50+ STARTUPS TO BE SHOWCASED @ ".to_string(),
            highlight: Some("JABAA 3.0".to_string()),
        }
    }
}

/// Everything needed to build a gallery, injectable instead of the
/// built-in table.
///
/// Missing sections fall back to their defaults, including `entries`,
/// which falls back to the built-in showcase.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GalleryConfig {
    pub heading: Heading,
    pub layout: LayoutConfig,
    pub entries: Vec<ShowcaseEntry>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            heading: Heading::default(),
            layout: LayoutConfig::default(),
            entries: crate::builtin::entries(),
        }
    }
}

impl GalleryConfig {
    /// Parse a TOML gallery description.
    ///
    /// Bodies read from TOML are static text.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_heading() {
        let heading = Heading::default();
        assert_eq!(heading.text, "50+ STARTUPS TO BE SHOWCASED @ ");
        assert_eq!(heading.highlight.as_deref(), Some("JABAA 3.0"));
    }

    #[test]
    fn default_uses_builtin_entries() {
        let config = GalleryConfig::default();
        assert_eq!(config.entries.len(), 5);
        assert_eq!(config.entries[1].title, "NET-R");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_config() {
        let config = GalleryConfig::from_toml_str(
            r#"
            [heading]
            text = "Demo day "
            highlight = "2026"

            [layout]
            wide_columns = 3

            [[entries]]
            title = "A"
            description = "first"
            collapsed_image = { src = "a.png" }
            expanded_image = { src = "a-big.png", width = 800, height = 600 }
            cta_label = "Visit"
            cta_target = "https://a.example"
            body = "About A"

            [[entries]]
            title = "B"
            collapsed_image = { src = "b.png" }
            expanded_image = { src = "b-big.png" }
            cta_label = "Visit"
            cta_target = "https://b.example"
            "#,
        )
        .unwrap();

        assert_eq!(config.heading.text, "Demo day ");
        assert_eq!(config.heading.highlight.as_deref(), Some("2026"));
        assert_eq!(config.layout.wide_columns, 3);
        assert_eq!(config.layout.columns, 2);
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[0].collapsed_image.width, 150);
        assert_eq!(config.entries[0].expanded_image.width, 800);
        assert_eq!(config.entries[0].body.materialize(), "About A");
        assert_eq!(config.entries[1].description, "");
        assert_eq!(config.entries[1].body.materialize(), "");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_rejects_missing_fields() {
        let err = GalleryConfig::from_toml_str(
            r#"
            [[entries]]
            title = "A"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
