//! Recording helper for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("NBU_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{endpoint}_{key}.{ext}"));
    fs::write(&path, body)?;

    if env::var("NBU_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("NBU_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
