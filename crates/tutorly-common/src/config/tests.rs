use super::*;
use secrecy::ExposeSecret;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.static_dir, "public");
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert!(config.llm.api_key.is_none());
    assert!(!config.enrichment_enabled());
}

#[test]
fn test_env_overrides() {
    let config = Config::default()
        .with_env(env(&[
            ("PORT", "8080"),
            ("OPENAI_API_KEY", "sk-test"),
            ("WOLFRAM_APPID", "APP-123"),
            ("GOOGLE_API_KEY", "AIza-test"),
            ("GOOGLE_CX", "engine-1"),
        ]))
        .unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.llm.api_key.as_ref().unwrap().expose_secret(), "sk-test");
    assert!(config.enrichment_enabled());
    assert_eq!(config.google.cx.as_deref(), Some("engine-1"));
}

#[test]
fn test_empty_env_value_leaves_feature_disabled() {
    let config = Config::default()
        .with_env(env(&[("WOLFRAM_APPID", ""), ("PORT", " ")]))
        .unwrap();
    assert!(!config.enrichment_enabled());
    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_invalid_port_is_rejected() {
    let err = Config::default()
        .with_env(env(&[("PORT", "eighty")]))
        .unwrap_err();
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn test_toml_sections_are_optional() {
    let config = Config::from_toml_str(
        r#"
        [server]
        static_dir = "dist"

        [llm]
        model = "gpt-4o"
        "#,
    )
    .unwrap();
    assert_eq!(config.server.static_dir, "dist");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.llm.model, "gpt-4o");
    assert_eq!(config.google.search_url, "https://www.googleapis.com/customsearch/v1");
}

#[test]
fn test_env_wins_over_file() {
    let config = Config::from_toml_str("[server]\nport = 4000\n")
        .unwrap()
        .with_env(env(&[("PORT", "5000")]))
        .unwrap();
    assert_eq!(config.server.port, 5000);
}

#[test]
fn test_debug_output_redacts_credentials() {
    let config = Config::default()
        .with_env(env(&[("OPENAI_API_KEY", "sk-very-secret")]))
        .unwrap();
    let printed = format!("{config:?}");
    assert!(!printed.contains("sk-very-secret"));
}
