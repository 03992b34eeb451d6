//! # パス名変更の計画
//!
//! 名前に旧識別子を含むファイル・ディレクトリの一覧から、実行順序つきの
//! 名前変更リストを作る。
//!
//! ## 順序の規則
//!
//! 作業リストは一度だけ計算し、深いパスから順に処理する。
//! 各エントリは自身の最終コンポーネントだけを置換するため、
//! 子を先に移動してから親を移動すれば、親子関係の順序に依存した
//! 取りこぼしや二重処理が起きない。
//!
//! ```text
//! fastapi_template/fastapi_template.toml  →  fastapi_template/my_api.toml
//! fastapi_template                        →  my_api
//! ```

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

/// 1 件のパス名変更
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRename {
    /// 変更前のパス
    pub from: PathBuf,
    /// 変更後のパス（親ディレクトリは変更前と同じ）
    pub to:   PathBuf,
}

/// パス名変更の作業リストを作る
///
/// - 最終コンポーネントに `old` を含むパスのみを対象とする
/// - 重複したパスは 1 件にまとめる
/// - コンポーネント数の多い順（同数ならパスの辞書順）に並べる
/// - 置換しても名前が変わらないパスは除外する
pub fn plan_path_renames<I>(old: &str, new: &str, paths: I) -> Vec<PathRename>
where
    I: IntoIterator<Item = PathBuf>,
{
    if old.is_empty() || old == new {
        return Vec::new();
    }

    let unique: BTreeSet<PathBuf> = paths.into_iter().collect();

    let mut renames: Vec<PathRename> = unique
        .into_iter()
        .filter_map(|from| {
            let to = renamed_path(&from, old, new)?;
            Some(PathRename { from, to })
        })
        .collect();

    renames.sort_by(|a, b| {
        depth(&b.from)
            .cmp(&depth(&a.from))
            .then_with(|| a.from.cmp(&b.from))
    });

    renames
}

/// 最終コンポーネントの `old` を `new` に置換したパス
fn renamed_path(path: &Path, old: &str, new: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    if !name.contains(old) {
        return None;
    }
    Some(path.with_file_name(name.replace(old, new)))
}

fn depth(path: &Path) -> usize {
    path.components().count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rename(from: &str, to: &str) -> PathRename {
        PathRename {
            from: PathBuf::from(from),
            to:   PathBuf::from(to),
        }
    }

    #[test]
    fn test_深いパスから順に並べる() {
        let paths = vec![
            PathBuf::from("src/fastapi_template"),
            PathBuf::from("src/fastapi_template/fastapi_template_cli.rs"),
            PathBuf::from("fastapi_template.toml"),
        ];

        let plan = plan_path_renames("fastapi_template", "my_api", paths);

        assert_eq!(
            plan,
            vec![
                rename(
                    "src/fastapi_template/fastapi_template_cli.rs",
                    "src/fastapi_template/my_api_cli.rs"
                ),
                rename("src/fastapi_template", "src/my_api"),
                rename("fastapi_template.toml", "my_api.toml"),
            ]
        );
    }

    #[test]
    fn test_最終コンポーネントのみを置換する() {
        let paths = vec![PathBuf::from("fastapi_template/api/main.rs")];

        let plan = plan_path_renames("fastapi_template", "my_api", paths);

        assert!(plan.is_empty());
    }

    #[test]
    fn test_重複を除外する() {
        let paths = vec![
            PathBuf::from("fastapi_template"),
            PathBuf::from("fastapi_template"),
        ];

        let plan = plan_path_renames("fastapi_template", "my_api", paths);

        assert_eq!(plan, vec![rename("fastapi_template", "my_api")]);
    }

    #[test]
    fn test_同じ名前への変更は計画しない() {
        let paths = vec![PathBuf::from("fastapi_template")];

        let plan = plan_path_renames("fastapi_template", "fastapi_template", paths);

        assert!(plan.is_empty());
    }

    #[test]
    fn test_1つの名前に複数回現れる場合はすべて置換する() {
        let paths = vec![PathBuf::from("tests/fastapi_template_fastapi_template.rs")];

        let plan = plan_path_renames("fastapi_template", "x", paths);

        assert_eq!(
            plan,
            vec![rename(
                "tests/fastapi_template_fastapi_template.rs",
                "tests/x_x.rs"
            )]
        );
    }
}
