//! Build-time constant table.
//!
//! Each constant maps to the JSON string literal of a resolved backend URL,
//! ready to be substituted verbatim into client bundles.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::schema::RuntimeConfig;

pub const DEFINE_BACKEND_API_URL: &str = "__BACKEND_API_URL__";
pub const DEFINE_WP_API_URL: &str = "__WP_API_URL__";
pub const DEFINE_NODE_API_URL: &str = "__NODE_API_URL__";

/// Constant name → JSON-encoded literal.
pub fn define_constants(config: &RuntimeConfig) -> BTreeMap<&'static str, String> {
    let backends = &config.backends;
    BTreeMap::from([
        (DEFINE_BACKEND_API_URL, json_literal(&backends.backend_api_url)),
        (DEFINE_WP_API_URL, json_literal(&backends.wp_api_url)),
        (DEFINE_NODE_API_URL, json_literal(&backends.node_api_url)),
    ])
}

fn json_literal(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_quoted() {
        let defines = define_constants(&RuntimeConfig::default());
        assert_eq!(defines.len(), 3);
        assert_eq!(defines[DEFINE_BACKEND_API_URL], "\"http://localhost:8080\"");
        assert_eq!(
            defines[DEFINE_WP_API_URL],
            "\"http://localhost:8000/wp-json/wp/v2\""
        );
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let mut config = RuntimeConfig::default();
        config.backends.node_api_url = r#"http://x/"a"\b"#.to_string();
        let defines = define_constants(&config);
        assert_eq!(defines[DEFINE_NODE_API_URL], r#""http://x/\"a\"\\b""#);
    }
}
