//! # FastAPI Template ドメイン層
//!
//! プロジェクト名のリネームに関わる純粋なロジックを定義する。
//!
//! ## 設計方針
//!
//! - ファイルシステムやプロセス起動には一切依存しない
//! - 入力の検証は値オブジェクトの生成時に行い、不正な名前を型レベルで排除する
//! - 副作用を伴う処理（走査・書き込み・移動）は `infra` と `renamer` に任せる
//!
//! ## 依存関係の方向
//!
//! ```text
//! renamer → infra → domain
//! api     → shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`identifier`] - プロジェクト名と 3 種類の表記（kebab / snake / Title）
//! - [`path_rename`] - パス名変更の計画（深い順の作業リスト）
//!
//! ## 使用例
//!
//! ```rust
//! use fastapi_template_domain::identifier::{IdentifierTriple, ProjectName};
//!
//! let name = ProjectName::parse("my-awesome-api").unwrap();
//! let triple = IdentifierTriple::from_name(&name);
//!
//! assert_eq!(triple.snake(), "my_awesome_api");
//! assert_eq!(triple.title(), "My Awesome Api");
//! ```

pub mod error;
pub mod identifier;
pub mod path_rename;

pub use error::DomainError;
