//! # ファイル列挙
//!
//! リネーム対象のファイルを内容・名前で列挙する。
//!
//! ## 実装の選択
//!
//! | 実装 | 内容検索 | 名前検索 | 用途 |
//! |------|----------|----------|------|
//! | [`GitFinder`] | `git grep -l` | `git ls-files` | バージョン管理下のチェックアウト |
//! | [`WalkFinder`] | ディレクトリ走査 + バイト列検索 | ディレクトリ走査 | git が使えない環境 |
//!
//! どちらの実装も、名前検索では `.` で始まるパス（`.git`, `.github` など）を対象外とする。

mod git;
mod walk;

use std::path::{Component, Path, PathBuf};

pub use git::GitFinder;
pub use walk::WalkFinder;

use crate::InfraError;

/// 内容・名前によるファイル列挙
///
/// 返すパスはすべてプロジェクトルートからの相対パス。
pub trait ProjectFinder {
    /// 内容に `pattern` を含むファイルを列挙する
    fn find_files_by_content(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError>;

    /// 名前（最終コンポーネント）に `pattern` を含むファイル・ディレクトリを列挙する
    fn find_paths_by_name(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError>;
}

impl<T: ProjectFinder + ?Sized> ProjectFinder for Box<T> {
    fn find_files_by_content(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError> {
        (**self).find_files_by_content(pattern)
    }

    fn find_paths_by_name(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError> {
        (**self).find_paths_by_name(pattern)
    }
}

/// 列挙に使う実装の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinderKind {
    /// `.git` があれば [`GitFinder`]、なければ [`WalkFinder`]
    #[default]
    Auto,
    /// 常に [`GitFinder`]
    Git,
    /// 常に [`WalkFinder`]
    Walk,
}

impl FinderKind {
    /// ルートディレクトリに対する列挙実装を構築する
    pub fn build(self, root: &Path) -> Box<dyn ProjectFinder> {
        let use_git = match self {
            Self::Auto => root.join(".git").exists(),
            Self::Git => true,
            Self::Walk => false,
        };

        if use_git {
            tracing::debug!(root = %root.display(), "git でファイルを列挙します");
            Box::new(GitFinder::new(root))
        } else {
            tracing::debug!(root = %root.display(), "ディレクトリ走査でファイルを列挙します");
            Box::new(WalkFinder::new(root))
        }
    }
}

/// `.` で始まるコンポーネントを含むか
fn is_hidden(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

/// 最終コンポーネントに `pattern` を含むか
fn name_contains(path: &Path, pattern: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().contains(pattern))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(".github/workflows/ci.yml", true)]
    #[case("apps/.env", true)]
    #[case("apps/api/src/main.rs", false)]
    #[case("./apps/api", false)]
    fn test_is_hiddenは隠しコンポーネントを検出する(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_hidden(Path::new(path)), expected);
    }

    #[test]
    fn test_name_containsは最終コンポーネントのみを見る() {
        assert!(name_contains(Path::new("src/fastapi_template"), "fastapi_template"));
        assert!(!name_contains(
            Path::new("fastapi_template/main.rs"),
            "fastapi_template"
        ));
    }

    #[test]
    fn test_autoはgitディレクトリがなければ走査を選ぶ() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "fastapi-template").unwrap();

        let finder = FinderKind::Auto.build(dir.path());

        let found = finder.find_files_by_content("fastapi-template").unwrap();
        assert_eq!(found, vec![PathBuf::from("notes.txt")]);
    }
}
