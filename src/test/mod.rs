use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

mod inventory;
mod snapshot;

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "netinv-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

pub(crate) fn temp_store(prefix: &str) -> (PathBuf, crate::store::Store) {
    let dir = unique_temp_dir(prefix);
    let store = crate::store::Store::new(dir.join("devices.txt"), dir.join("connections.txt"));
    (dir, store)
}
