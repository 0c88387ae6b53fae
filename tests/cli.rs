use std::fs;
use std::path::Path;
use std::process::Command;

fn write(path: &Path, content: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn filter_smoke_exits_1_on_missing_dataset() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_dir = temp_dir.path().join("out");

    let status = Command::new(env!("CARGO_BIN_EXE_filter_smoke"))
        .arg("--dir-dataset")
        .arg(temp_dir.path().join("missing"))
        .arg("--save-dir")
        .arg(&save_dir)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!save_dir.exists());
}

#[test]
fn filter_smoke_exits_0_on_success() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path().join("ds");
    let save_dir = temp_dir.path().join("out");
    write(&root.join("images/pyronear_001.jpg"), b"jpeg");
    write(&root.join("labels/pyronear_001.txt"), b"0 0.5 0.5 0.1 0.1");

    let status = Command::new(env!("CARGO_BIN_EXE_filter_smoke"))
        .arg("--dir-dataset")
        .arg(&root)
        .arg("--save-dir")
        .arg(&save_dir)
        .args(["-log", "debug"])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(save_dir.join("images/pyronear_001.jpg").is_file());
}

#[test]
fn split_false_positives_exits_1_on_missing_dataset() {
    let temp_dir = tempfile::tempdir().unwrap();
    let save_dir = temp_dir.path().join("out");

    let status = Command::new(env!("CARGO_BIN_EXE_split_false_positives"))
        .arg("--dir-dataset")
        .arg(temp_dir.path().join("missing"))
        .arg("--save-dir")
        .arg(&save_dir)
        .args(["--random-seed", "-3"])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!save_dir.exists());
}

#[test]
fn split_false_positives_rejects_missing_seed() {
    let status = Command::new(env!("CARGO_BIN_EXE_split_false_positives"))
        .args(["--ratio-train-val", "0.8"])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(2));
}
