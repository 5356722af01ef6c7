//! End-to-end tests for running git across a repository set

mod support;

use multi_git::{MultiGitError, RepositorySet};
use serial_test::serial;
use std::fs;
use support::Workspace;

#[test]
fn test_status_on_fresh_repositories() {
    let ws = Workspace::new();
    let dir_1 = ws.fresh_repo("dir-1");
    let dir_2 = ws.fresh_repo("dir-2");

    for ignore_errors in [false, true] {
        let set = RepositorySet::new(ws.path(), &["dir-1", "dir-2"], ignore_errors).unwrap();
        let result = set.run("status");

        assert!(result.is_success(), "{:?}", result.error);
        assert_eq!(result.len(), 2);
        for path in [&dir_1, &dir_2] {
            let output = result.output(path).expect("missing output");
            assert!(output.contains("nothing to commit"), "{output}");
        }
    }
}

#[test]
fn test_status_stops_at_non_repository() {
    let ws = Workspace::new();
    let plain = ws.plain_dir("dir-1");
    let repo = ws.fresh_repo("dir-2");

    let set = RepositorySet::new(ws.path(), &["dir-1", "dir-2"], false).unwrap();
    let result = set.run("status");

    assert_eq!(result.len(), 1);
    assert!(
        result
            .output(&plain)
            .unwrap()
            .contains("not a git repository")
    );
    assert!(result.output(&repo).is_none());
    assert!(matches!(
        result.error,
        Some(MultiGitError::CommandExitedNonZero { ref path, .. }) if *path == plain
    ));
}

#[test]
fn test_status_keeps_earlier_output_on_failure() {
    let ws = Workspace::new();
    let repo = ws.fresh_repo("dir-1");
    let plain = ws.plain_dir("dir-2");

    let set = RepositorySet::new(ws.path(), &["dir-1", "dir-2"], false).unwrap();
    let result = set.run("status");

    assert_eq!(result.len(), 2);
    assert!(result.output(&repo).unwrap().contains("nothing to commit"));
    assert!(result.output(&plain).is_some());
    assert!(result.error.is_some());
}

#[test]
fn test_status_ignoring_errors_covers_all_repositories() {
    let ws = Workspace::new();
    let plain = ws.plain_dir("dir-1");
    let repo = ws.fresh_repo("dir-2");

    let set = RepositorySet::new(ws.path(), &["dir-1", "dir-2"], true).unwrap();
    let result = set.run("status");

    assert!(result.is_success());
    assert_eq!(result.len(), 2);
    assert!(
        result
            .output(&plain)
            .unwrap()
            .contains("not a git repository")
    );
    assert!(result.output(&repo).unwrap().contains("nothing to commit"));
    assert_eq!(result.ignored.len(), 1);
}

#[test]
fn test_checkout_new_branch_twice() {
    let ws = Workspace::new();
    let dir_1 = ws.committed_repo("dir-1");
    let dir_2 = ws.committed_repo("dir-2");

    let set = RepositorySet::new(ws.path(), &["dir-1", "dir-2"], true).unwrap();
    let first = set.run("checkout -b test-branch");
    assert!(first.is_success());
    for path in [&dir_1, &dir_2] {
        assert_eq!(
            first.output(path).unwrap(),
            "Switched to a new branch 'test-branch'\n"
        );
    }

    // Same set again: the branch exists now
    let second = set.run("checkout -b test-branch");
    assert!(second.is_success());
    assert_eq!(second.len(), 2);
    for path in [&dir_1, &dir_2] {
        assert!(second.output(path).unwrap().contains("already exists"));
    }

    let strict = RepositorySet::new(ws.path(), &["dir-1", "dir-2"], false).unwrap();
    let third = strict.run("checkout -b test-branch");
    assert_eq!(third.len(), 1);
    assert!(third.output(&dir_1).unwrap().contains("already exists"));
    assert!(matches!(
        third.error,
        Some(MultiGitError::CommandExitedNonZero { .. })
    ));
}

#[test]
fn test_quoted_argument_reaches_git_as_one_argument() {
    let ws = Workspace::new();
    let repo = ws.committed_repo("dir-1");

    let set = RepositorySet::new(ws.path(), &["dir-1"], false).unwrap();
    let commit = set.run(r#"commit --allow-empty -m "fix bug in parser""#);
    assert!(commit.is_success(), "{:?}", commit.output(&repo));

    let log = set.run("log -1 --format=%s");
    assert_eq!(log.output(&repo).unwrap(), "\"fix bug in parser\"\n");
}

#[test]
fn test_log_after_commit() {
    let ws = Workspace::new();
    let repo = ws.fresh_repo("dir-1");
    support::commit_file(&repo, "file_1.txt", "File data for: file_1.txt").unwrap();

    let set = RepositorySet::new(ws.path(), &["dir-1"], true).unwrap();
    let result = set.run("log --oneline");

    assert!(result.output(&repo).unwrap().ends_with("added files\n"));
}

#[test]
fn test_repository_removed_after_construction() {
    let ws = Workspace::new();
    let gone = ws.fresh_repo("dir-1");
    let repo = ws.fresh_repo("dir-2");

    let set = RepositorySet::new(ws.path(), &["dir-1", "dir-2"], true).unwrap();
    fs::remove_dir_all(&gone).unwrap();
    let result = set.run("status");

    assert!(result.is_success());
    assert!(result.output(&gone).is_none());
    assert!(result.output(&repo).is_some());
    assert!(matches!(
        result.ignored.as_slice(),
        [MultiGitError::RepositoryUnreachable { .. }]
    ));
}

#[test]
#[serial]
fn test_working_directory_is_unchanged() {
    let ws = Workspace::new();
    ws.fresh_repo("dir-1");
    ws.plain_dir("dir-2");
    let before = std::env::current_dir().unwrap();

    let strict = RepositorySet::new(ws.path(), &["dir-1", "dir-2", "dir-3"], false).unwrap();
    let result = strict.run("status");
    assert!(result.error.is_some());
    assert_eq!(std::env::current_dir().unwrap(), before);

    let lenient = RepositorySet::new(ws.path(), &["dir-1", "dir-2", "dir-3"], true).unwrap();
    lenient.run("status");
    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[test]
#[serial]
fn test_relative_base_dir_resolves_against_current_directory() {
    let ws = Workspace::new();
    let nested = ws.plain_dir("checkouts");
    let before = std::env::current_dir().unwrap();

    std::env::set_current_dir(ws.path()).unwrap();
    let set = RepositorySet::new("checkouts", &["api", "web"], false);
    std::env::set_current_dir(&before).unwrap();

    let set = set.unwrap();
    let cwd = fs::canonicalize(ws.path()).unwrap();
    assert_eq!(
        set.repositories(),
        &[
            cwd.join("checkouts").join("api"),
            cwd.join("checkouts").join("web")
        ]
    );
    assert!(nested.exists());
}
