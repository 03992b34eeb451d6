//! # コマンドライン引数
//!
//! ```text
//! Usage: rename-project [OPTIONS] <NEW_NAME>
//! Example: rename-project my-awesome-api
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fastapi_template_infra::FinderKind;

/// 使用例（引数エラー時に表示する）
pub const EXAMPLE: &str = "Example: rename-project my-awesome-api";

/// テンプレートのプロジェクト名を新しい名前に変更する
#[derive(Debug, Parser)]
#[command(name = "rename-project", version)]
pub struct Cli {
    /// 新しいプロジェクト名（kebab-case、例: my-awesome-api）
    pub new_name: String,

    /// プロジェクトのルートディレクトリ
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// ファイルの列挙方法
    #[arg(long, value_enum, default_value_t = FinderArg::Auto)]
    pub finder: FinderArg,
}

/// `--finder` の選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FinderArg {
    /// `.git` があれば git、なければディレクトリ走査
    Auto,
    /// git grep / git ls-files
    Git,
    /// ディレクトリ走査
    Walk,
}

impl From<FinderArg> for FinderKind {
    fn from(arg: FinderArg) -> Self {
        match arg {
            FinderArg::Auto => FinderKind::Auto,
            FinderArg::Git => FinderKind::Git,
            FinderArg::Walk => FinderKind::Walk,
        }
    }
}
