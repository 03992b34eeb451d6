//! # リネーム処理のエラー定義
//!
//! | エラー種別 | 発生タイミング | 副作用 |
//! |-----------|----------------|--------|
//! | `InvalidName` | 処理開始前 | なし |
//! | `Enumeration` | ファイル列挙 | それまでの変更は残る |
//! | `Filesystem` | 書き込み・移動・削除 | それまでの変更は残る |
//!
//! いずれも即座に処理を中断し、ロールバックは行わない。
//! UTF-8 として読めないファイルはエラーにせず、スキップとして報告する。

use fastapi_template_domain::DomainError;
use fastapi_template_infra::InfraError;
use thiserror::Error;

/// リネーム処理で発生するエラー
#[derive(Debug, Error)]
pub enum RenameError {
    /// 新しいプロジェクト名が不正
    #[error(transparent)]
    InvalidName(#[from] DomainError),

    /// ファイル列挙の失敗
    #[error("'{pattern}' を含むファイルの列挙に失敗しました")]
    Enumeration {
        /// 検索したパターン
        pattern: String,
        #[source]
        source:  InfraError,
    },

    /// ファイル操作の失敗
    #[error(transparent)]
    Filesystem(#[from] InfraError),
}
