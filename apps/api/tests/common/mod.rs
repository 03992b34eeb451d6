//! API テスト共通のフィクスチャ

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use fastapi_template_api::build_app;
use serde_json::Value as JsonValue;
use tower::ServiceExt;

/// テスト用のアプリケーション
pub fn client() -> Router {
    build_app()
}

/// GET リクエストを送信する
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// レスポンスボディを JSON として解析する
pub async fn parse_body(response: Response<Body>) -> JsonValue {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
