#![allow(clippy::unwrap_used)]

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("campaigntui")
        .chain(list.iter().copied())
        .map(String::from)
        .collect()
}

#[test]
fn test_flag_overrides_default() {
    let (config, rest) = Config::split_args(&args(&["--base-url", "http://10.0.0.2:8080/"]));
    assert_eq!(config.base_url, "http://10.0.0.2:8080/");
    assert!(rest.is_empty());
}

#[test]
fn test_base_url_taken_verbatim() {
    // No validation; a bad URL only matters once a request goes out.
    let (config, _) = Config::split_args(&args(&["--base-url", "nonsense"]));
    assert_eq!(config.base_url, "nonsense");
}

#[test]
fn test_positional_args_pass_through() {
    let (config, rest) = Config::split_args(&args(&[
        "open",
        "/menu",
        "--base-url",
        "http://localhost:8080/",
    ]));
    assert_eq!(config.base_url, "http://localhost:8080/");
    assert_eq!(rest, vec!["open".to_string(), "/menu".to_string()]);
}

#[test]
fn test_form_updates_flag() {
    let (config, rest) = Config::split_args(&args(&["--form-updates", "list"]));
    assert!(config.form_updates);
    assert_eq!(rest, vec!["list".to_string()]);

    let (config, _) = Config::split_args(&args(&["list"]));
    assert!(!config.form_updates);
}

#[test]
fn test_dangling_flag_falls_back() {
    let (config, rest) = Config::split_args(&args(&["--base-url"]));
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(rest.is_empty());
}

#[test]
fn test_log_dir_is_created() {
    // The platform dirs crate offers no injection point, so only assert the
    // happy path when a home directory exists at all.
    if directories::ProjectDirs::from("com", "campaigntui", "CampaignTUI").is_some() {
        let dir = log_dir().unwrap();
        assert!(dir.ends_with("logs"));
        assert!(dir.exists());
    }
}
