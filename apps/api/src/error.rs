//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! エラーレスポンスは RFC 7807（Problem Details for HTTP APIs）の形式で返す:
//!
//! ```json
//! {
//!   "type": "about:blank",
//!   "title": "リソースが見つかりません",
//!   "status": 404,
//!   "detail": "/missing"
//! }
//! ```

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// ルートが存在しない（404 Not Found）
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),
}

/// RFC 7807 準拠のエラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// エラーの種類を識別する URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// エラーの概要
    pub title:      String,
    /// HTTP ステータスコード
    pub status:     u16,
    /// エラーの詳細情報（オプション）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail:     Option<String>,
}

impl ErrorResponse {
    fn new(status: StatusCode, title: &str, detail: Option<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.to_string(),
            status: status.as_u16(),
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(StatusCode::NOT_FOUND, "リソースが見つかりません", Some(path)),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// 未定義のルートに対するフォールバックハンドラ
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
