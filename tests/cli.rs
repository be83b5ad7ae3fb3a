//! CLI integration tests for the bookstash binary.
//!
//! Each test uses an isolated temp directory for the database, ensuring tests
//! can run in parallel safely.

#![allow(deprecated)] // Command::cargo_bin deprecation only affects custom build dirs

use std::path::Path;

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn data_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    fn data_dir_str(&self) -> String {
        self.data_dir().to_string_lossy().to_string()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("bookstash").expect("failed to find binary");
        cmd.env("NO_COLOR", "1").env_remove("BOOKSTASH_DATA_DIR");
        cmd
    }

    fn init(&self) -> assert_cmd::assert::Assert {
        self.cmd()
            .args(["init", "--data-dir", &self.data_dir_str()])
            .assert()
    }

    /// Runs `bookstash <args...> --data-dir <dir>`.
    fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.cmd()
            .args(args)
            .args(["--data-dir", &self.data_dir_str()])
            .assert()
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self
            .cmd()
            .args(args)
            .args(["--data-dir", &self.data_dir_str(), "--json"])
            .output()
            .expect("failed to run command");
        assert!(output.status.success(), "command failed: {args:?}");
        serde_json::from_slice(&output.stdout).expect("failed to parse JSON")
    }

    fn tree(&self) -> Value {
        self.json(&["tree"])
    }
}

fn id_of(items: &Value, field: &str, value: &str) -> i64 {
    items
        .as_array()
        .expect("not an array")
        .iter()
        .find(|item| item[field] == value)
        .unwrap_or_else(|| panic!("no item with {field} = {value}"))["id"]
        .as_i64()
        .expect("id not an integer")
}

const SAMPLE: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
    <DT><H3>Work</H3>
    <DL><p>
        <DT><A HREF="https://example.com/guide">Guide</A>
    </DL><p>
    <DT><A HREF="https://news.example/">News</A>
</DL><p>
"#;

// ============================================================================
// Init
// ============================================================================

#[test]
fn init_creates_database_file() {
    let ctx = TestContext::new();

    ctx.init()
        .success()
        .stdout(predicate::str::contains("Initialized database"));

    assert!(ctx.data_dir().join("bookstash.db").exists());
}

#[test]
fn init_twice_keeps_existing_data() {
    let ctx = TestContext::new();
    ctx.init().success();
    ctx.run(&["folder", "create", "Work"]).success();

    ctx.init()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    let tree = ctx.tree();
    assert_eq!(tree["folders"].as_array().unwrap().len(), 1);
}

#[test]
fn commands_require_initialized_database() {
    let ctx = TestContext::new();

    ctx.run(&["tree"])
        .failure()
        .stderr(predicate::str::contains("bookstash init"));
}

// ============================================================================
// Folders and bookmarks
// ============================================================================

#[test]
fn folder_and_bookmark_lifecycle() {
    let ctx = TestContext::new();
    ctx.init().success();

    ctx.run(&["folder", "create", "Work"])
        .success()
        .stdout(predicate::str::contains("Created folder 'Work'"));
    let work = id_of(&ctx.tree()["folders"], "name", "Work");

    ctx.run(&["folder", "create", "Projects", "--parent", &work.to_string()])
        .success();
    let projects = id_of(&ctx.tree()["folders"], "name", "Projects");

    ctx.run(&[
        "bookmark",
        "add",
        "Guide",
        "https://example.com/guide",
        "--folder",
        &projects.to_string(),
    ])
    .success();

    ctx.run(&["tree"])
        .success()
        .stdout(predicate::str::contains("Work/"))
        .stdout(predicate::str::contains("    Guide <https://example.com/guide>"));

    ctx.run(&["folder", "rename", &projects.to_string(), "Side projects"])
        .success();
    ctx.run(&["folder", "move", &projects.to_string(), "--root"])
        .success();

    let tree = ctx.tree();
    let moved = tree["folders"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["id"] == projects)
        .unwrap()
        .clone();
    assert_eq!(moved["name"], "Side projects");
    assert!(moved["parent_id"].is_null());
}

#[test]
fn bookmark_add_rejects_non_http_url() {
    let ctx = TestContext::new();
    ctx.init().success();

    ctx.run(&["bookmark", "add", "Files", "ftp://files.example"])
        .failure()
        .stderr(predicate::str::contains("HTTP"));
}

#[test]
fn folder_move_into_descendant_fails() {
    let ctx = TestContext::new();
    ctx.init().success();
    ctx.run(&["folder", "create", "A"]).success();
    let a = id_of(&ctx.tree()["folders"], "name", "A");
    ctx.run(&["folder", "create", "B", "--parent", &a.to_string()])
        .success();
    let b = id_of(&ctx.tree()["folders"], "name", "B");

    ctx.run(&["folder", "move", &a.to_string(), "--parent", &b.to_string()])
        .failure()
        .stderr(predicate::str::contains("cycle"));
}

#[test]
fn bookmark_reorder_changes_tree_order() {
    let ctx = TestContext::new();
    ctx.init().success();
    for (title, url) in [("One", "https://one.example/"), ("Two", "https://two.example/")] {
        ctx.run(&["bookmark", "add", title, url]).success();
    }
    let tree = ctx.tree();
    let one = id_of(&tree["bookmarks"], "title", "One");
    let two = id_of(&tree["bookmarks"], "title", "Two");

    ctx.run(&["bookmark", "reorder", &two.to_string(), &one.to_string()])
        .success();

    let titles: Vec<String> = ctx.tree()["bookmarks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Two", "One"]);
}

// ============================================================================
// Trash
// ============================================================================

#[test]
fn folder_delete_moves_subtree_to_trash_and_restore_is_single() {
    let ctx = TestContext::new();
    ctx.init().success();
    ctx.run(&["folder", "create", "Work"]).success();
    let work = id_of(&ctx.tree()["folders"], "name", "Work");
    ctx.run(&["folder", "create", "Projects", "--parent", &work.to_string()])
        .success();
    let projects = id_of(&ctx.tree()["folders"], "name", "Projects");

    ctx.run(&["folder", "delete", &work.to_string()])
        .success()
        .stdout(predicate::str::contains("Moved 2 folder(s)"));
    assert!(ctx.tree()["folders"].as_array().unwrap().is_empty());

    let trash = ctx.json(&["trash", "list"]);
    assert_eq!(trash["folders"].as_array().unwrap().len(), 2);

    ctx.run(&["trash", "restore-folder", &projects.to_string()])
        .success();
    let trash = ctx.json(&["trash", "list"]);
    assert_eq!(trash["folders"].as_array().unwrap().len(), 1);
    assert_eq!(trash["folders"][0]["id"], work);
}

#[test]
fn purge_requires_trashed_record() {
    let ctx = TestContext::new();
    ctx.init().success();
    ctx.run(&["bookmark", "add", "Keep", "https://keep.example/"])
        .success();
    let keep = id_of(&ctx.tree()["bookmarks"], "title", "Keep");

    ctx.run(&["trash", "purge-bookmark", &keep.to_string()])
        .failure()
        .stderr(predicate::str::contains("not found"));

    ctx.run(&["bookmark", "delete", &keep.to_string()]).success();
    ctx.run(&["trash", "purge-bookmark", &keep.to_string()])
        .success();
    ctx.run(&["trash", "list"])
        .success()
        .stdout(predicate::str::contains("Trash is empty."));
}

#[test]
fn trash_empty_reports_counts() {
    let ctx = TestContext::new();
    ctx.init().success();
    ctx.run(&["folder", "create", "Old"]).success();
    let old = id_of(&ctx.tree()["folders"], "name", "Old");
    ctx.run(&[
        "bookmark",
        "add",
        "Stale",
        "https://stale.example/",
        "--folder",
        &old.to_string(),
    ])
    .success();
    ctx.run(&["folder", "delete", &old.to_string()]).success();

    ctx.run(&["trash", "empty"])
        .success()
        .stdout(predicate::str::contains("1 folder(s) and 1 bookmark(s)"));
}

// ============================================================================
// Search, import and export
// ============================================================================

#[test]
fn import_then_search_and_export() {
    let ctx = TestContext::new();
    ctx.init().success();
    let file = ctx.temp_dir.child("bookmarks.html");
    file.write_str(SAMPLE).unwrap();
    let file_path = file.path().to_string_lossy().to_string();

    ctx.run(&["import", &file_path])
        .success()
        .stdout(predicate::str::contains("1 created"))
        .stdout(predicate::str::contains("2 added"));

    ctx.run(&["import", &file_path])
        .success()
        .stdout(predicate::str::contains("0 added, 2 already present"));

    ctx.run(&["search", "guide"])
        .success()
        .stdout(predicate::str::contains("https://example.com/guide"))
        .stdout(predicate::str::contains("1 result(s)"));

    let out = ctx.temp_dir.child("out.html");
    ctx.run(&["export", "--output", &out.path().to_string_lossy()])
        .success();
    out.assert(predicate::str::starts_with(
        "<!DOCTYPE NETSCAPE-Bookmark-file-1>",
    ));
    out.assert(predicate::str::contains(">Work</H3>"));
    out.assert(predicate::str::contains("HREF=\"https://news.example/\""));
}

#[test]
fn export_to_stdout() {
    let ctx = TestContext::new();
    ctx.init().success();
    ctx.run(&["bookmark", "add", "Docs", "https://docs.example/"])
        .success();

    ctx.run(&["export"])
        .success()
        .stdout(predicate::str::contains("<TITLE>Bookmarks</TITLE>"))
        .stdout(predicate::str::contains(">Docs</A>"));
}

#[test]
fn import_missing_file_fails() {
    let ctx = TestContext::new();
    ctx.init().success();

    ctx.run(&["import", "/definitely/not/here.html"])
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
