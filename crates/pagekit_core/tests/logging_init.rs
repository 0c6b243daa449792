use pagekit_core::{init_logging, logging_status};

#[test]
fn init_logging_is_idempotent_and_rejects_reconfiguration() {
    let dir = tempfile::tempdir().unwrap();
    let other = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap().to_string();
    let other_str = other.path().to_str().unwrap().to_string();

    init_logging("info", &dir_str).expect("first init should succeed");
    init_logging("INFO", &dir_str).expect("same config should be idempotent");

    let level_err = init_logging("debug", &dir_str).expect_err("level change must fail");
    assert!(level_err.contains("cannot change"));
    let dir_err = init_logging("info", &other_str).expect_err("directory change must fail");
    assert!(dir_err.contains("cannot move"));

    let (level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(active_dir, dir.path());
}
