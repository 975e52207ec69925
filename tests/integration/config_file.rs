//! Configuration integration tests

use std::fs;
use std::rc::Rc;

use release_zalgo::util::config::{load_config_from, load_config_layers, ConfigError, PROJECT_CONFIG_FILE};
use release_zalgo::{unwrap_sync_with, Fail, Rejection, Resolution, Settle, Then, UnwrapErrorKind};
use tempfile::TempDir;

/// Thenable settling to the next layer without flattening it.
struct Layer(Resolution<u32, String>);

impl Then<u32, String> for Layer {
    fn then(
        &self,
        settle: Settle<u32, String>,
        _fail: Fail<u32, String>,
    ) {
        settle.resolve(self.0.clone());
    }
}

fn nested(
    value: u32,
    layers: usize,
) -> Resolution<u32, String> {
    (0..layers).fold(Resolution::Value(value), |inner, _| Resolution::thenable(Rc::new(Layer(inner))))
}

#[test]
fn test_configured_depth_limits_unwrap() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zalgo.toml");
    fs::write(&path, "[unwrap]\nmax_depth = 2\n").unwrap();

    let limits = load_config_from(&path).unwrap().unwrap.limits();
    assert_eq!(limits.max_depth, 2);

    assert_eq!(unwrap_sync_with(nested(1, 2), limits).unwrap(), 1);
    match unwrap_sync_with(nested(1, 3), limits) {
        Err(Rejection::Unwrap(error)) => assert_eq!(error.kind(), UnwrapErrorKind::DepthExceeded { limit: 2 }),
        other => panic!("expected depth failure, got {:?}", other),
    }
}

#[test]
fn test_project_file_sets_log_level() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), "[log]\nlevel = \"trace\"\n").unwrap();

    let config = load_config_layers(None, dir.path(), |_| None).unwrap();
    assert_eq!(config.log.level, "trace");
}

#[test]
fn test_zero_depth_is_rejected_on_every_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), "[unwrap]\nmax_depth = 0\n").unwrap();
    let path = dir.path().join(PROJECT_CONFIG_FILE);

    assert!(matches!(load_config_from(&path), Err(ConfigError::InvalidValue { .. })));
    assert!(matches!(
        load_config_layers(None, dir.path(), |_| None),
        Err(ConfigError::InvalidValue { .. })
    ));

    let empty = TempDir::new().unwrap();
    let from_env = load_config_layers(None, empty.path(), |name| {
        (name == "RELEASE_ZALGO_MAX_DEPTH").then(|| "0".to_string())
    });
    assert!(matches!(from_env, Err(ConfigError::InvalidEnv { .. })));
}
