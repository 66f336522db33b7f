use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn empty_environment_yields_defaults() {
    let map = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(cfg.database_url, "sqlite://job_listings_expanded.db");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.source_url, "https://remoteok.io/remote-dev-jobs");
    assert_eq!(cfg.source_label, "RemoteOK");
    assert_eq!(cfg.default_location, "Remote");
    assert_eq!(cfg.user_agent, "Mozilla/5.0");
    assert_eq!(cfg.max_pages, 50);
    assert_eq!(cfg.max_records, 1000);
    assert_eq!(cfg.delay_min_ms, 1000);
    assert_eq!(cfg.delay_max_ms, 2000);
    assert_eq!(
        cfg.export_path,
        Path::new("processed_job_listings_from_db.csv")
    );
}

#[test]
fn overrides_are_honoured() {
    let mut map = HashMap::new();
    map.insert("DATABASE_URL", "sqlite::memory:");
    map.insert("JOBSCOPE_MAX_PAGES", "3");
    map.insert("JOBSCOPE_MAX_RECORDS", "25");
    map.insert("JOBSCOPE_DELAY_MIN_MS", "0");
    map.insert("JOBSCOPE_DELAY_MAX_MS", "0");
    map.insert("JOBSCOPE_EXPORT_PATH", "/tmp/out.csv");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.database_url, "sqlite::memory:");
    assert_eq!(cfg.max_pages, 3);
    assert_eq!(cfg.max_records, 25);
    assert_eq!(cfg.delay_min_ms, 0);
    assert_eq!(cfg.delay_max_ms, 0);
    assert_eq!(cfg.export_path, Path::new("/tmp/out.csv"));
}

#[test]
fn invalid_max_pages_is_rejected() {
    let mut map = HashMap::new();
    map.insert("JOBSCOPE_MAX_PAGES", "many");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBSCOPE_MAX_PAGES"
        ),
        "expected InvalidEnvVar(JOBSCOPE_MAX_PAGES), got: {result:?}"
    );
}

#[test]
fn negative_delay_is_rejected() {
    let mut map = HashMap::new();
    map.insert("JOBSCOPE_DELAY_MIN_MS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBSCOPE_DELAY_MIN_MS"
        ),
        "expected InvalidEnvVar(JOBSCOPE_DELAY_MIN_MS), got: {result:?}"
    );
}

#[test]
fn inverted_delay_range_is_rejected() {
    let mut map = HashMap::new();
    map.insert("JOBSCOPE_DELAY_MIN_MS", "3000");
    map.insert("JOBSCOPE_DELAY_MAX_MS", "2000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::Validation(_))),
        "expected Validation error, got: {result:?}"
    );
}
