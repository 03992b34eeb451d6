//! # ルートハンドラ
//!
//! ```text
//! GET /
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! {
//!   "message": "Welcome to the FastAPI Template API"
//! }
//! ```

use axum::Json;
use serde::Serialize;

use crate::APP_TITLE;

/// ルートレスポンス
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// 歓迎メッセージ
    pub message: String,
}

/// ルートエンドポイント
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to the {APP_TITLE} API"),
    })
}
