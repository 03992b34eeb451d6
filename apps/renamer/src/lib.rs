//! # プロジェクトリネーム CLI
//!
//! テンプレートの名前（`fastapi-template` / `fastapi_template` / `FastAPI Template`）を
//! 新しいプロジェクト名に一括で置き換える。
//!
//! ## 処理の流れ
//!
//! 順序は入れ替えられない。ディレクトリ名を先に変えると、内容検索が
//! 古いパスを前提にした列挙結果と食い違うため、内容の置換を必ず先に行う。
//!
//! ```text
//! 1. 新しい名前から 3 表記を導出
//! 2. 内容の置換       （3 表記いずれかを含むファイル）
//! 3. パス名の変更     （名前に snake_case 表記を含むファイル・ディレクトリ、深い順）
//! 4. ビルド成果物の削除（target/ と Cargo.lock）
//! ```
//!
//! ## モジュール構成
//!
//! - [`cli`] - コマンドライン引数
//! - [`error`] - リネーム処理のエラー
//! - [`usecase`] - リネーム処理本体

pub mod cli;
pub mod error;
pub mod usecase;

pub use error::RenameError;
pub use usecase::{ProjectRenamer, RenameReport, ResetTargets};
