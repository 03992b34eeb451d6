//! # ドメイン層エラー定義
//!
//! プロジェクト名の検証失敗など、ドメイン固有の例外状態を表現するエラー型。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力されたプロジェクト名が命名規則に違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 空文字列
    /// - 空白やパス区切り文字を含む
    /// - 連続したハイフン（空のセグメント）
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
