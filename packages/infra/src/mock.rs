//! # テスト用モック列挙実装
//!
//! ユースケーステストで使用するインメモリの [`ProjectFinder`]。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! fastapi-template-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use crate::{InfraError, finder::ProjectFinder};

// ===== MockProjectFinder =====

/// 固定の列挙結果を返すモック
///
/// 問い合わせられたパターンを記録し、指定したパターンでは失敗を返せる。
#[derive(Clone, Default)]
pub struct MockProjectFinder {
    by_content: HashMap<String, Vec<PathBuf>>,
    by_name:    HashMap<String, Vec<PathBuf>>,
    failing:    Option<String>,
    queries:    Arc<Mutex<Vec<String>>>,
}

impl MockProjectFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内容検索の結果を登録する
    pub fn with_content_match(mut self, pattern: &str, paths: &[&str]) -> Self {
        self.by_content
            .insert(pattern.to_string(), paths.iter().map(PathBuf::from).collect());
        self
    }

    /// 名前検索の結果を登録する
    pub fn with_name_match(mut self, pattern: &str, paths: &[&str]) -> Self {
        self.by_name
            .insert(pattern.to_string(), paths.iter().map(PathBuf::from).collect());
        self
    }

    /// 指定したパターンの問い合わせを失敗させる
    pub fn failing_on(mut self, pattern: &str) -> Self {
        self.failing = Some(pattern.to_string());
        self
    }

    /// これまでに問い合わせられたパターン（呼び出し順）
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    fn record(&self, pattern: &str) -> Result<(), InfraError> {
        self.queries.lock().unwrap().push(pattern.to_string());
        if self.failing.as_deref() == Some(pattern) {
            return Err(InfraError::Command {
                command: format!("mock {pattern}"),
                message: "失敗するよう設定されています".to_string(),
            });
        }
        Ok(())
    }
}

impl ProjectFinder for MockProjectFinder {
    fn find_files_by_content(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError> {
        self.record(pattern)?;
        Ok(self.by_content.get(pattern).cloned().unwrap_or_default())
    }

    fn find_paths_by_name(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError> {
        self.record(pattern)?;
        Ok(self.by_name.get(pattern).cloned().unwrap_or_default())
    }
}
