// tests/logging.rs
//
// The log macros are part of the crate surface; smoke them end to end.
//
use std::fs;
use std::path::Path;

#[test]
fn log_macros_append_to_the_store_log() {
    parkview::logf!("log smoke test: info");
    parkview::logd!("log smoke test: debug");
    parkview::loge!("log smoke test: error");

    let path = Path::new(".store/debug.log");
    assert!(path.exists());
    let text = fs::read_to_string(path).unwrap();
    assert!(text.contains("[INFO] log smoke test: info"));
    assert!(text.contains("[ERROR] log smoke test: error"));
}
