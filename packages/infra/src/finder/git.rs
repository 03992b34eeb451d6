//! # git によるファイル列挙
//!
//! `git grep` と `git ls-files` を使い、バージョン管理下のファイルだけを列挙する。
//! 出力は `-z` で NUL 区切りにし、特殊文字を含むパスのクォートを避ける。

use std::{
    collections::BTreeSet,
    path::PathBuf,
    process::{Command, Output},
};

use super::{ProjectFinder, is_hidden, name_contains};
use crate::InfraError;

/// `git grep` が一致なしで終了したときの終了コード
const GREP_NO_MATCH: i32 = 1;

/// git を使ったファイル列挙
#[derive(Debug, Clone)]
pub struct GitFinder {
    root: PathBuf,
}

impl GitFinder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// ルートディレクトリで git コマンドを実行する
    fn git(&self, args: &[&str]) -> Result<Output, InfraError> {
        tracing::debug!(args = ?args, "git コマンドを実行します");

        Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .map_err(|e| InfraError::Command {
                command: command_line(args),
                message: e.to_string(),
            })
    }
}

impl ProjectFinder for GitFinder {
    fn find_files_by_content(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError> {
        let args = ["grep", "-l", "-z", "-F", "-e", pattern];
        let output = self.git(&args)?;

        match output.status.code() {
            Some(0) => Ok(split_nul(&output.stdout).map(PathBuf::from).collect()),
            Some(GREP_NO_MATCH) => Ok(Vec::new()),
            _ => Err(failure(&args, &output)),
        }
    }

    fn find_paths_by_name(&self, pattern: &str) -> Result<Vec<PathBuf>, InfraError> {
        let args = ["ls-files", "-z"];
        let output = self.git(&args)?;

        if !output.status.success() {
            return Err(failure(&args, &output));
        }

        // ls-files はファイルしか返さないため、祖先ディレクトリも候補に加える
        let mut found = BTreeSet::new();
        for file in split_nul(&output.stdout).map(PathBuf::from) {
            for candidate in file.ancestors().filter(|p| !p.as_os_str().is_empty()) {
                if !is_hidden(candidate) && name_contains(candidate, pattern) {
                    found.insert(candidate.to_path_buf());
                }
            }
        }

        // インデックスには作業ツリーで移動・削除済みのパスも残っている
        Ok(found
            .into_iter()
            .filter(|path| self.root.join(path).symlink_metadata().is_ok())
            .collect())
    }
}

fn split_nul(stdout: &[u8]) -> impl Iterator<Item = String> + '_ {
    stdout
        .split(|b| *b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
}

fn command_line(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}

fn failure(args: &[&str], output: &Output) -> InfraError {
    InfraError::Command {
        command: command_line(args),
        message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}
