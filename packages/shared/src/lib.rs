//! # FastAPI Template 共有ユーティリティ
//!
//! API サーバーとリネーム CLI の両方で使用する共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod observability;

pub use observability::{LogFormat, LogWriter, TracingConfig, init_tracing};
