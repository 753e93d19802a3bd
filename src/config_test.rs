use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_url: DEFAULT_SITE_URL.to_owned(), site_root: None });
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SITE_URL", "https://whatsaround.example/"),
        ("SITE_ROOT", "/srv/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_url, "https://whatsaround.example");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " "), ("SITE_URL", ""), ("SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn rejects_bad_port() {
    for bad in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", bad)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: bad.to_owned() });
    }
}

#[test]
fn rejects_non_http_site_url() {
    for bad in ["whatsaround.example", "ftp://x", "https://"] {
        let err = ServerConfig::from_lookup(lookup(&[("SITE_URL", bad)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidSiteUrl { value: bad.to_owned() });
    }
}

#[test]
fn error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "x".into() };
    assert!(err.to_string().contains("PORT"));
}

// Only test in this crate that touches the process environment.
#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4123");
        std::env::remove_var("SITE_URL");
        std::env::remove_var("SITE_ROOT");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4123);
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);

    unsafe { std::env::remove_var("PORT") };
}
