//! # アプリケーション設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8020` | ポート番号 |
//! | `ENVIRONMENT` | No | `development` | 実行環境（development/staging/production） |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use fastapi_template_api::config::ApiConfig;
//!
//! // .env ファイルから読み込み（開発環境）
//! dotenvy::dotenv().ok();
//!
//! let config = ApiConfig::from_env()?;
//! println!("サーバー: {}", config.address());
//! ```

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 8020;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない値
    #[error("API_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// API サーバーの設定
///
/// アプリケーション起動時に一度だけ構築する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host:        String,
    /// ポート番号
    pub port:        u16,
    /// 実行環境（`development`, `staging`, `production`）
    pub environment: String,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 未設定の項目はデフォルト値を使用する。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    ///
    /// プロセスの環境変数を書き換えずにテストするために使用する。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("API_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    /// `host:port` 形式のアドレス
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            config,
            ApiConfig {
                host:        "0.0.0.0".to_string(),
                port:        8020,
                environment: "development".to_string(),
            }
        );
        assert_eq!(config.address(), "0.0.0.0:8020");
    }

    #[test]
    fn test_環境変数の値を優先する() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "9000"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.address(), "127.0.0.1:9000");
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_不正なポート番号はエラーになる() {
        let result = ApiConfig::from_lookup(lookup_from(&[("API_PORT", "http")]));

        assert_eq!(result, Err(ConfigError::InvalidPort("http".to_string())));
    }
}
