//! Edge case and error handling tests for mdtree


use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

use harness::{TestDir, dir_row, run_mdtree};
use mdtree::{BuilderConfig, TreeError, build};

// ============================================================================
// Filesystem Errors
// ============================================================================

#[test]
fn test_root_is_a_file() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "x");

    let (stdout, stderr, success) = run_mdtree(dir.path(), &["plain.txt"]);
    assert!(!success, "a file root should fail");
    assert!(stdout.is_empty());
    assert!(stderr.contains("plain.txt"), "stderr should name the path: {}", stderr);
}

#[test]
fn test_unreadable_subdirectory_aborts_build() {
    let dir = TestDir::new();
    dir.add_file("r/open/a.txt", "");
    let locked = dir.add_dir("r/locked");
    dir.add_file("r/locked/secret.txt", "");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything; only assert when permissions actually apply.
    let readable = fs::read_dir(&locked).is_ok();
    let result = build(dir.path().join("r"), BuilderConfig::default());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    if !readable {
        let err = result.unwrap_err();
        assert!(matches!(err, TreeError::Filesystem { .. }));
        assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
    }
}

#[test]
fn test_output_into_missing_directory_fails() {
    let dir = TestDir::new();
    dir.add_dir("proj");

    let (_stdout, stderr, success) = run_mdtree(dir.path(), &["proj", "-o", "nope/TREE.md"]);
    assert!(!success);
    assert!(stderr.starts_with("mdtree: error writing"), "got: {}", stderr);
}

// ============================================================================
// Symlinks
// ============================================================================

#[test]
fn test_symlink_to_directory_is_followed() {
    let dir = TestDir::new();
    dir.add_file("r/real/file.rs", "");
    symlink(dir.path().join("r/real"), dir.path().join("r/link")).unwrap();

    let lines = build(dir.path().join("r"), BuilderConfig::default()).unwrap();
    assert_eq!(
        lines.to_strings(),
        vec![
            dir_row("r"),
            dir_row("├── link"),
            "│   └── file.rs".to_string(),
            dir_row("└── real"),
            "    └── file.rs".to_string(),
        ]
    );
}

#[test]
fn test_broken_symlink_is_listed_as_file() {
    let dir = TestDir::new();
    dir.add_file("r/real.rs", "");
    symlink("nonexistent.rs", dir.path().join("r/broken.rs")).unwrap();

    let lines = build(dir.path().join("r"), BuilderConfig::default()).unwrap();
    let names: Vec<_> = lines.iter().skip(1).map(|l| (l.name.as_str(), l.is_dir)).collect();
    assert_eq!(names, vec![("broken.rs", false), ("real.rs", false)]);
}

#[test]
fn test_symlink_cycle_bounded_by_depth() {
    let dir = TestDir::new();
    dir.add_file("r/sub/file.rs", "");
    symlink("..", dir.path().join("r/sub/up")).unwrap();

    let config = BuilderConfig {
        max_depth: Some(4),
        ..Default::default()
    };
    let lines = build(dir.path().join("r"), config).unwrap();
    assert!(lines.iter().all(|l| l.depth <= 4));
    assert!(lines.iter().any(|l| l.name == "up"));
}

// ============================================================================
// Names and Ordering
// ============================================================================

#[test]
fn test_unicode_and_spaces_in_names() {
    let dir = TestDir::new();
    dir.add_file("r/my notes.md", "");
    dir.add_file("r/日本語.txt", "");
    dir.add_dir("r/émigré");

    let (stdout, _stderr, success) = run_mdtree(dir.path(), &["r"]);
    assert!(success);
    assert!(stdout.contains("my notes.md"));
    assert!(stdout.contains("日本語.txt"));
    assert!(stdout.contains(&dir_row("émigré")));
}

#[test]
fn test_mixed_case_directories_interleave_with_files() {
    let dir = TestDir::new();
    dir.add_dir("r/Zeta");
    dir.add_file("r/alpha.txt", "");
    dir.add_dir("r/beta");
    dir.add_file("r/Gamma.txt", "");

    let lines = build(dir.path().join("r"), BuilderConfig::default()).unwrap();
    let names: Vec<_> = lines.iter().skip(1).map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["alpha.txt", "beta", "Gamma.txt", "Zeta"]);
}

#[test]
fn test_only_ignored_entries_gives_root_only() {
    let dir = TestDir::new();
    dir.add_file("r/.a", "");
    dir.add_dir("r/.b");

    let (stdout, _stderr, success) = run_mdtree(dir.path(), &["r"]);
    assert!(success);
    assert_eq!(stdout, format!("{}\n", dir_row("r")));
}

#[test]
fn test_every_entry_listed_once() {
    let dir = TestDir::new();
    let files = [
        "r/a/1.txt",
        "r/a/2.txt",
        "r/a/b/3.txt",
        "r/c/4.txt",
        "r/5.txt",
        "r/D/6.txt",
    ];
    for f in files {
        dir.add_file(f, "");
    }

    let lines = build(dir.path().join("r"), BuilderConfig::default()).unwrap();
    for f in files {
        let name = f.rsplit('/').next().unwrap();
        let count = lines.iter().filter(|l| l.name == name).count();
        assert_eq!(count, 1, "{} should appear exactly once", name);
    }
    // root + 6 files + a, b, c, D
    assert_eq!(lines.len(), 11);
}
