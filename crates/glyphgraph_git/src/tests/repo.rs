//! Tests against a real `git` binary in a temp dir. Skipped when git is missing.

use std::path::Path;
use std::process::Command;

use chrono::NaiveDate;
use tempfile::TempDir;

use super::runtime;
use crate::{BranchSwitch, GitError, GitRepo, Vcs, sweep_branches};

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

fn git(dir: &Path, args: &[&str]) -> String {
    let out = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run git");
    assert!(
        out.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).unwrap()
}

fn init_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "--quiet"]);
    git(dir.path(), &["config", "user.name", "Glyph Graph"]);
    git(dir.path(), &["config", "user.email", "glyphgraph@example.com"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    dir
}

#[test]
fn test_open_rejects_plain_directory() {
    if !git_available() {
        return;
    }
    let rt = runtime();
    rt.block_on(async {
        let dir = TempDir::new().unwrap();
        let err = GitRepo::open(dir.path()).await.err().unwrap();
        assert!(matches!(err, GitError::NotARepository(_)));
    });
}

#[test]
fn test_open_rejects_git_dir_itself() {
    if !git_available() {
        return;
    }
    let rt = runtime();
    rt.block_on(async {
        let dir = init_repo();
        let git_dir = dir.path().join(".git");
        let err = GitRepo::open(&git_dir).await.err().unwrap();
        assert!(matches!(err, GitError::NotARepository(p) if p == git_dir));
    });
}

#[test]
fn test_open_from_subdirectory_finds_root() {
    if !git_available() {
        return;
    }
    let rt = runtime();
    rt.block_on(async {
        let dir = init_repo();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let repo = GitRepo::open(&nested).await.unwrap();
        assert_eq!(
            repo.root().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    });
}

#[test]
fn test_open_rejects_missing_directory() {
    let rt = runtime();
    rt.block_on(async {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = GitRepo::open(&missing).await.err().unwrap();
        assert!(matches!(err, GitError::NotARepository(p) if p == missing));
    });
}

#[test]
fn test_commit_at_backdates_author_and_committer() {
    if !git_available() {
        return;
    }
    let rt = runtime();
    rt.block_on(async {
        let dir = init_repo();
        let repo = GitRepo::open(dir.path()).await.unwrap();
        let when = NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        repo.commit_at(when, "Draw 'HI' - commit 1/1").await.unwrap();

        let log = git(
            dir.path(),
            &[
                "log",
                "-1",
                "--format=%ad|%cd|%s",
                "--date=format-local:%Y-%m-%d %H:%M:%S",
            ],
        );
        assert_eq!(
            log.trim(),
            "2024-01-07 12:00:00|2024-01-07 12:00:00|Draw 'HI' - commit 1/1"
        );
        let marker = std::fs::read_to_string(repo.marker_path()).unwrap();
        assert_eq!(marker, "2024-01-07 12:00:00 Draw 'HI' - commit 1/1\n");
    });
}

#[test]
fn test_ensure_branch_list_and_delete() {
    if !git_available() {
        return;
    }
    let rt = runtime();
    rt.block_on(async {
        let dir = init_repo();
        let repo = GitRepo::open(dir.path())
            .await
            .unwrap()
            .with_marker_file("pattern.log");
        let when = NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        repo.commit_at(when, "initial").await.unwrap();
        let base = repo.current_branch().await.unwrap().unwrap();

        assert_eq!(repo.ensure_branch("word-hi").await.unwrap(), BranchSwitch::Created);
        assert_eq!(repo.current_branch().await.unwrap().as_deref(), Some("word-hi"));
        repo.commit_at(when, "on word-hi").await.unwrap();

        assert_eq!(repo.ensure_branch(&base).await.unwrap(), BranchSwitch::Existing);
        assert_eq!(repo.ensure_branch("word-hi").await.unwrap(), BranchSwitch::Existing);
        assert_eq!(repo.ensure_branch("word-yo").await.unwrap(), BranchSwitch::Created);

        assert_eq!(
            repo.list_branches("word-").await.unwrap(),
            vec!["word-hi", "word-yo"]
        );

        let report = sweep_branches(&repo, "word-").await.unwrap();
        assert_eq!(report.deleted, vec!["word-hi"]);
        assert_eq!(report.skipped, vec!["word-yo"]);
        assert_eq!(repo.list_branches("word-").await.unwrap(), vec!["word-yo"]);
    });
}

#[test]
fn test_ensure_branch_rejects_invalid_names() {
    if !git_available() {
        return;
    }
    let rt = runtime();
    rt.block_on(async {
        let dir = init_repo();
        let repo = GitRepo::open(dir.path()).await.unwrap();
        for bad in ["", "-x", "word-a..b", "word-hi!?*"] {
            let err = repo.ensure_branch(bad).await.unwrap_err();
            assert!(matches!(err, GitError::InvalidBranchName(_)), "{bad:?}");
        }
    });
}

#[cfg(unix)]
#[test]
fn test_commit_failure_surfaces_git_diagnostics() {
    use std::os::unix::fs::PermissionsExt;

    if !git_available() {
        return;
    }
    let rt = runtime();
    rt.block_on(async {
        let dir = init_repo();
        let hook = dir.path().join(".git/hooks/pre-commit");
        std::fs::create_dir_all(hook.parent().unwrap()).unwrap();
        std::fs::write(&hook, "#!/bin/sh\necho 'blocked by hook' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&hook, std::fs::Permissions::from_mode(0o755)).unwrap();

        let repo = GitRepo::open(dir.path()).await.unwrap();
        let when = NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let err = repo.commit_at(when, "x").await.unwrap_err();
        match err {
            GitError::CommandFailed { command, stderr, .. } => {
                assert!(command.starts_with("git commit"), "{command}");
                assert!(stderr.contains("blocked by hook"), "{stderr}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    });
}
