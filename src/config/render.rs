//! Rendering the resolved configuration for inspection.

use crate::config::schema::RuntimeConfig;

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Toml,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML serialization failed: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Pretty-print the configuration.
pub fn render(config: &RuntimeConfig, format: Format) -> Result<String, RenderError> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(config)?,
        Format::Toml => toml::to_string_pretty(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trips() {
        let config = RuntimeConfig::default();
        let text = render(&config, Format::Json).unwrap();
        let back: RuntimeConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn toml_has_sections() {
        let text = render(&RuntimeConfig::default(), Format::Toml).unwrap();
        assert!(text.contains("output = \"server\""));
        assert!(text.contains("[server]"));
        assert!(text.contains("port = 4321"));
        assert!(text.contains("[dev_server.watch]"));
    }
}
