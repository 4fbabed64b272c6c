use root_anchors::config::AnchorConfig;
use root_anchors::dnssec::parse_timestamp;
use root_anchors::error::ConfigError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to ensure tests that modify environment variables don't run concurrently
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const VARS: [&str; 3] = ["ROOT_ANCHORS_FILE", "ROOT_ANCHORS_AT", "ROOT_ANCHORS_LOG"];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

#[test]
fn test_from_env_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let config = AnchorConfig::from_env().unwrap();
    assert_eq!(config, AnchorConfig::default());
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_from_env_overrides() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<TrustAnchor id="env" source="env"><Zone>.</Zone></TrustAnchor>"#
    )
    .unwrap();

    unsafe {
        std::env::set_var("ROOT_ANCHORS_FILE", file.path());
        std::env::set_var("ROOT_ANCHORS_AT", "2015-01-01T00:00:00Z");
        std::env::set_var("ROOT_ANCHORS_LOG", "root_anchors=trace");
    }

    let config = AnchorConfig::from_env();
    clear_env();
    let config = config.unwrap();

    assert_eq!(config.anchors_file.as_deref(), Some(file.path()));
    assert_eq!(
        config.evaluation_time(),
        parse_timestamp("2015-01-01T00:00:00Z").unwrap()
    );
    assert_eq!(config.log_filter, "root_anchors=trace");

    let store = config.load_store().unwrap();
    assert_eq!(store.document().id, "env");
    assert!(store.valid_ds_records(config.evaluation_time()).is_empty());
}

#[test]
fn test_from_env_invalid_time() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    unsafe {
        std::env::set_var("ROOT_ANCHORS_AT", "next tuesday");
    }
    let result = AnchorConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidTimestamp(_))));
}

#[test]
fn test_from_env_missing_file() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    unsafe {
        std::env::set_var("ROOT_ANCHORS_FILE", "/nonexistent/root-anchors.xml");
    }
    let result = AnchorConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::AnchorsFileNotFound(_))));
}

#[test]
fn test_load_store_reports_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "<TrustAnchor><Zone></Zone></TrustAnchor>").unwrap();

    let config = AnchorConfig {
        anchors_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(config.load_store(), Err(ConfigError::Anchor(_))));
}
