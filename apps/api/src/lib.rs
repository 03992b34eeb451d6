//! # FastAPI Template API サーバー
//!
//! テンプレートが出荷時に持つ最小構成の HTTP サービス。
//! 新しいプロジェクトはここにルートを追加していく。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | レスポンス |
//! |----------|------|------------|
//! | GET | `/` | `{"message": "Welcome to the FastAPI Template API"}` |
//! | GET | `/health` | `{"status": "healthy"}` |
//! | * | その他 | 404（RFC 7807 形式） |
//!
//! ## モジュール構成
//!
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use fastapi_template_api::build_app;
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8020").await?;
//! axum::serve(listener, build_app()).await?;
//! ```

pub mod config;
pub mod error;
pub mod handler;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// アプリケーションの表示名
pub const APP_TITLE: &str = "FastAPI Template";

/// ルーターを構築する
///
/// TraceLayer により、すべての HTTP リクエストがトレーシングされる。
pub fn build_app() -> Router {
    Router::new()
        .route("/", get(handler::root))
        .route("/health", get(handler::health_check))
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
}
