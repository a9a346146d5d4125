use std::io::Write;

use super::*;

#[test]
fn default_registry_lists_seven_apps() {
    let apps = default_apps().expect("embedded registry should be valid");
    assert_eq!(apps.apps.len(), 7);
    assert_eq!(apps.apps[0].app_name, "Aha");
    assert_eq!(apps.apps[6].app_name, "Cignal Play");
}

#[test]
fn default_registry_every_app_has_both_stores() {
    let apps = default_apps().unwrap();
    for app in &apps.apps {
        assert!(app.apple.is_some(), "{} missing apple", app.app_name);
        assert!(app.google.is_some(), "{} missing google", app.app_name);
    }
}

#[test]
fn parse_applies_locale_defaults() {
    let yaml = r#"
apps:
  - app_name: Demo
    apple:
      app_id: "123"
    google:
      package: com.example.demo
"#;
    let apps = parse_apps(yaml).unwrap();
    let app = &apps.apps[0];
    assert_eq!(app.apple.as_ref().unwrap().country, "us");
    let google = app.google.as_ref().unwrap();
    assert_eq!(google.lang, "en");
    assert_eq!(google.country, "us");
}

#[test]
fn parse_allows_single_store() {
    let yaml = r"
apps:
  - app_name: Android Only
    google:
      package: com.example.android
";
    let apps = parse_apps(yaml).unwrap();
    assert!(apps.apps[0].apple.is_none());
    assert!(apps.apps[0].google.is_some());
}

#[test]
fn validate_rejects_empty_name() {
    let yaml = r#"
apps:
  - app_name: "  "
    apple:
      app_id: "1"
"#;
    let err = parse_apps(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)), "got: {err:?}");
}

#[test]
fn validate_rejects_app_without_stores() {
    let yaml = r"
apps:
  - app_name: Nowhere
";
    let err = parse_apps(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("Nowhere")),
        "got: {err:?}"
    );
}

#[test]
fn validate_rejects_non_numeric_apple_id() {
    let yaml = r"
apps:
  - app_name: Bad Id
    apple:
      app_id: com.example.bad
";
    let err = parse_apps(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("numeric")),
        "got: {err:?}"
    );
}

#[test]
fn validate_rejects_duplicate_names_case_insensitive() {
    let yaml = r#"
apps:
  - app_name: Univision
    apple:
      app_id: "1"
  - app_name: univision
    apple:
      app_id: "2"
"#;
    let err = parse_apps(yaml).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")),
        "got: {err:?}"
    );
}

#[test]
fn parse_rejects_malformed_yaml() {
    let err = parse_apps("apps: [").unwrap_err();
    assert!(matches!(err, ConfigError::AppsFileParse(_)), "got: {err:?}");
}

#[test]
fn load_apps_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "apps:\n  - app_name: From File\n    apple:\n      app_id: \"42\"\n      country: ph"
    )
    .unwrap();

    let apps = load_apps(file.path()).unwrap();
    assert_eq!(apps.apps.len(), 1);
    assert_eq!(apps.apps[0].apple.as_ref().unwrap().country, "ph");
}

#[test]
fn load_apps_missing_file_is_io_error() {
    let err = load_apps(Path::new("/definitely/not/here/apps.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::AppsFileIo { .. }), "got: {err:?}");
}
