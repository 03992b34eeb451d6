//! # ディレクトリ走査によるファイル列挙
//!
//! git が使えない環境向けに、`walkdir` でプロジェクトルート配下を直接走査する。
//!
//! ## 走査対象外
//!
//! - `.` で始まるエントリ（`.git`, `.venv`, `.env` など）とその配下
//! - ルート直下のビルド出力ディレクトリ（既定では `target`）

use std::{fs, path::PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{ProjectFinder, name_contains};
use crate::InfraError;

/// ルート直下でのみ除外するディレクトリ
const ROOT_ONLY_SKIP_DIRS: &[&str] = &["target"];

/// ディレクトリ走査によるファイル列挙
#[derive(Debug, Clone)]
pub struct WalkFinder {
    root: PathBuf,
}

impl WalkFinder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 除外規則を適用したエントリを相対パスとともに列挙する
    fn entries(&self) -> impl Iterator<Item = Result<(DirEntry, PathBuf), InfraError>> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry))
            .map(|entry| -> Result<(DirEntry, PathBuf), InfraError> {
                let entry = entry?;
                let relative = entry
                    .path()
                    .strip_prefix(&self.root)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| entry.path().to_path_buf());
                Ok((entry, relative))
            })
    }
}

impl ProjectFinder for WalkFinder {
    fn find_files_by_content(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError> {
        let needle = pattern.as_bytes();
        let mut found = Vec::new();

        for entry in self.entries() {
            let (entry, relative) = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let content = fs::read(entry.path()).map_err(|e| InfraError::io(entry.path(), e))?;
            if contains_bytes(&content, needle) {
                found.push(relative);
            }
        }

        Ok(found)
    }

    fn find_paths_by_name(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError> {
        let mut found = Vec::new();

        for entry in self.entries() {
            let (_, relative) = entry?;
            if name_contains(&relative, pattern) {
                found.push(relative);
            }
        }

        Ok(found)
    }
}

fn is_excluded(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return true;
    }
    entry.depth() == 1 && entry.file_type().is_dir() && ROOT_ONLY_SKIP_DIRS.contains(&&*name)
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}
