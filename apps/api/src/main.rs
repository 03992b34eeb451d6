//! # FastAPI Template API サーバー
//!
//! ## 環境変数
//!
//! `.env` ファイルが存在すれば読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8020`） |
//! | `LOG_FORMAT` | No | `json` で JSON ログ |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p fastapi-template-api
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use fastapi_template_api::{build_app, config::ApiConfig};
use fastapi_template_shared::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("fastapi-template");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.span().entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    let addr: SocketAddr = config
        .address()
        .parse()
        .with_context(|| format!("アドレスのパースに失敗しました: {}", config.address()))?;

    tracing::info!(
        environment = %config.environment,
        "API サーバーを起動します: {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, build_app()).await?;

    Ok(())
}
