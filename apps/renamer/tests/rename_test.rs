//! リネーム処理の統合テスト
//!
//! 一時ディレクトリにテンプレート構成を作り、実際に走査・変更する。
//! 特に断りのない限り `WalkFinder` を使う。

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use fastapi_template_domain::identifier::{IdentifierTriple, ProjectName};
use fastapi_template_infra::{GitFinder, ProjectFinder, WalkFinder, Workspace};
use fastapi_template_renamer::{ProjectRenamer, RenameReport};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use walkdir::WalkDir;

fn write(root: &Path, relative: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn template_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(
        root,
        "pyproject.toml",
        "[tool.poetry]\nname = \"fastapi-template\"\npackages = [{ include = \"fastapi_template\" }]\n",
    );
    write(root, "README.md", "# FastAPI Template\n");
    write(
        root,
        "fastapi_template/api/main.py",
        "app = FastAPI(title=\"FastAPI Template\")\n",
    );
    write(root, "fastapi_template/__init__.py", "");
    write(
        root,
        "tests/test_fastapi_template.py",
        "from fastapi_template.api.main import app\n",
    );
    write(root, "Cargo.lock", "# lock\n");
    write(root, "target/debug/fastapi_template", "stale");

    dir
}

fn rename(root: &Path, name: &str) -> RenameReport {
    rename_with(WalkFinder::new(root), root, name)
}

fn rename_with<F: ProjectFinder>(finder: F, root: &Path, name: &str) -> RenameReport {
    let to = IdentifierTriple::from_name(&ProjectName::parse(name).unwrap());
    ProjectRenamer::new(finder, Workspace::new(root))
        .run(&to)
        .unwrap()
}

/// git リポジトリを初期化してすべてを追跡する（git が使えなければ `false`）
fn init_repository(root: &Path) -> bool {
    let run = |args: &[&str]| {
        Command::new("git")
            .args(args)
            .current_dir(root)
            .output()
            .is_ok_and(|output| output.status.success())
    };
    run(&["init", "--quiet"]) && run(&["add", "--all"])
}

/// ルート配下の全ファイル（`.git` を除く）
fn files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// ルート配下の全ファイルの内容を連結する
fn all_contents(root: &Path) -> String {
    files(root)
        .iter()
        .map(|path| String::from_utf8_lossy(&fs::read(path).unwrap()).into_owned())
        .collect()
}

#[test]
fn test_my_awesome_apiへのリネーム() {
    let dir = template_project();
    let root = dir.path();

    rename(root, "my-awesome-api");

    assert!(!root.join("fastapi_template").exists());
    assert_eq!(
        fs::read_to_string(root.join("my_awesome_api/api/main.py")).unwrap(),
        "app = FastAPI(title=\"My Awesome Api\")\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("pyproject.toml")).unwrap(),
        "[tool.poetry]\nname = \"my-awesome-api\"\npackages = [{ include = \"my_awesome_api\" }]\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "# My Awesome Api\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("tests/test_my_awesome_api.py")).unwrap(),
        "from my_awesome_api.api.main import app\n"
    );
}

#[test]
fn test_リネーム後はベースライン名がどこにも残らない() {
    let dir = template_project();
    let root = dir.path();

    rename(root, "my-awesome-api");

    let contents = all_contents(root);
    for form in IdentifierTriple::baseline().forms() {
        assert!(!contents.contains(form), "{form} が残っている");
    }
    assert!(
        files(root)
            .iter()
            .all(|path| !path.to_string_lossy().contains("fastapi_template"))
    );
}

#[test]
fn test_ビルド成果物を削除する() {
    let dir = template_project();
    let root = dir.path();

    let report = rename(root, "my-api");

    assert!(!root.join("target").exists());
    assert!(!root.join("Cargo.lock").exists());
    assert_eq!(report.removed.len(), 2);
}

#[test]
fn test_ネストした同名ディレクトリも深い順に変更する() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "fastapi_template/fastapi_template/fastapi_template.py", "");

    let report = rename(root, "my-api");

    assert!(root.join("my_api/my_api/my_api.py").is_file());
    assert!(!root.join("fastapi_template").exists());
    assert_eq!(report.renamed.len(), 3);
}

#[test]
fn test_2回目の実行では何も変更しない() {
    let dir = template_project();
    let root = dir.path();
    rename(root, "my-api");
    let before = all_contents(root);

    let report = rename(root, "my-api");

    assert!(report.is_unchanged());
    assert!(report.removed.is_empty());
    assert_eq!(all_contents(root), before);
}

#[test]
fn test_バイナリファイルは変更しない() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let bytes = b"\xff\xfe fastapi-template \x00\x01".to_vec();
    write(root, "assets/logo.bin", &bytes);
    write(root, "notes.txt", "fastapi-template\n");

    let report = rename(root, "my-api");

    assert_eq!(fs::read(root.join("assets/logo.bin")).unwrap(), bytes);
    assert_eq!(report.skipped, vec![Path::new("assets/logo.bin").to_path_buf()]);
    assert_eq!(
        fs::read_to_string(root.join("notes.txt")).unwrap(),
        "my-api\n"
    );
}

#[test]
fn test_隠しディレクトリは変更しない() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, ".venv/lib/fastapi_template.py", "fastapi-template\n");

    let report = rename(root, "my-api");

    assert!(report.is_unchanged());
    assert_eq!(
        fs::read_to_string(root.join(".venv/lib/fastapi_template.py")).unwrap(),
        "fastapi-template\n"
    );
}

#[test]
fn test_名前が一致するバイナリファイルは内容を保ったまま名前だけ変更する() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let bytes = b"\x89PNG\xff fastapi_template \x00".to_vec();
    write(root, "assets/fastapi_template.bin", &bytes);

    let report = rename(root, "my-api");

    assert!(!root.join("assets/fastapi_template.bin").exists());
    assert_eq!(fs::read(root.join("assets/my_api.bin")).unwrap(), bytes);
    assert_eq!(
        report.skipped,
        vec![PathBuf::from("assets/fastapi_template.bin")]
    );
    assert_eq!(report.renamed.len(), 1);
}

#[test]
fn test_gitで列挙しても2回目の実行では何も変更しない() {
    let dir = template_project();
    let root = dir.path();
    if !init_repository(root) {
        return;
    }

    let first = rename_with(GitFinder::new(root), root, "my-api");
    let before = all_contents(root);
    let second = rename_with(GitFinder::new(root), root, "my-api");

    assert!(root.join("my_api/api/main.py").is_file());
    assert!(!first.renamed.is_empty());
    assert!(second.is_unchanged());
    assert_eq!(all_contents(root), before);
}
