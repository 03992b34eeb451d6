//! # インフラ層エラー定義
//!
//! 外部コマンドの実行やファイルシステム操作で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: `std::io::Error`, `walkdir::Error` をラップ
//! - **パスの保持**: I/O エラーには対象パスを含め、ログだけで原因を特定できるようにする

use std::{io, path::PathBuf};

use thiserror::Error;

/// インフラ層で発生するエラー
#[derive(Debug, Error)]
pub enum InfraError {
    /// 外部コマンドの起動失敗、または異常終了
    ///
    /// `git grep` の終了コード 1（一致なし）はエラーとして扱わない。
    #[error("コマンドの実行に失敗しました: {command}: {message}")]
    Command {
        /// 実行したコマンドライン
        command: String,
        /// 標準エラー出力、または起動失敗の理由
        message: String,
    },

    /// ファイルシステム操作の失敗
    #[error("ファイル操作に失敗しました: {}: {source}", path.display())]
    Io {
        /// 操作対象のパス
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// 移動先が既に存在する
    ///
    /// 既存のファイルやディレクトリを上書きしないため、移動を中止する。
    #[error("移動先が既に存在します: {}", path.display())]
    AlreadyExists {
        /// 移動先のパス
        path: PathBuf,
    },

    /// ディレクトリ走査の失敗
    #[error("ディレクトリの走査に失敗しました: {0}")]
    Walk(#[from] walkdir::Error),
}

impl InfraError {
    /// `io::Error` に対象パスを付与する
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
