//! # FastAPI Template インフラ層
//!
//! リネーム処理が依存する外部要素（バージョン管理ツール・ファイルシステム）への
//! アクセスを提供する。
//!
//! ## 設計方針
//!
//! - **依存性の注入**: ファイル列挙は [`finder::ProjectFinder`] トレイト経由で行い、
//!   git が使えない環境ではディレクトリ走査に差し替えられるようにする
//! - **相対パス**: 列挙結果はすべてプロジェクトルートからの相対パスで返す
//! - **読み書きの集約**: 内容の読み取り・書き込み・移動・削除は [`workspace::Workspace`] に集約する
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー
//! - [`finder`] - 内容・名前によるファイル列挙（git / ディレクトリ走査）
//! - [`workspace`] - プロジェクトルート配下のファイル操作

pub mod error;
pub mod finder;
pub mod workspace;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
pub use finder::{FinderKind, GitFinder, ProjectFinder, WalkFinder};
pub use workspace::{TextContent, Workspace};
