//! # リネームユースケース
//!
//! 内容の置換 → パス名の変更 → ビルド成果物の削除を、この順序で一度ずつ実行する。
//!
//! 処理は同期的・逐次的に行い、途中で失敗した場合はその時点で中断する。
//! 中断前に行った変更は元に戻さない（バージョン管理から復元するか、再実行する）。

use std::{collections::BTreeSet, path::PathBuf};

use fastapi_template_domain::{
    identifier::IdentifierTriple,
    path_rename::{PathRename, plan_path_renames},
};
use fastapi_template_infra::{ProjectFinder, TextContent, Workspace};

use crate::RenameError;

/// リネーム後に削除するビルド成果物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetTargets {
    /// 依存関係のビルドディレクトリ
    pub build_dir: PathBuf,
    /// 依存関係のロックファイル
    pub lock_file: PathBuf,
}

impl Default for ResetTargets {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("target"),
            lock_file: PathBuf::from("Cargo.lock"),
        }
    }
}

/// リネーム結果
///
/// パスはすべてプロジェクトルートからの相対パス。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    /// 内容を書き換えたファイル
    pub updated: Vec<PathBuf>,
    /// UTF-8 として読めずにスキップしたファイル
    pub skipped: Vec<PathBuf>,
    /// 名前を変更したファイル・ディレクトリ（実行順）
    pub renamed: Vec<PathRename>,
    /// 削除したビルド成果物
    pub removed: Vec<PathBuf>,
}

impl RenameReport {
    /// 内容・パスのいずれも変更しなかったか
    pub fn is_unchanged(&self) -> bool {
        self.updated.is_empty() && self.renamed.is_empty()
    }
}

/// プロジェクトのリネーム処理
pub struct ProjectRenamer<F> {
    finder:    F,
    workspace: Workspace,
    from:      IdentifierTriple,
    reset:     ResetTargets,
}

impl<F: ProjectFinder> ProjectRenamer<F> {
    /// テンプレートのベースライン名を置き換えるリネーム処理を作成する
    pub fn new(finder: F, workspace: Workspace) -> Self {
        Self {
            finder,
            workspace,
            from: IdentifierTriple::baseline(),
            reset: ResetTargets::default(),
        }
    }

    /// 削除するビルド成果物を変更する
    pub fn with_reset_targets(mut self, reset: ResetTargets) -> Self {
        self.reset = reset;
        self
    }

    /// 置き換え元の名前
    pub fn baseline(&self) -> &IdentifierTriple {
        &self.from
    }

    /// リネームを実行する
    pub fn run(&self, to: &IdentifierTriple) -> Result<RenameReport, RenameError> {
        let mut report = RenameReport::default();

        self.replace_contents(to, &mut report)?;
        self.rename_paths(to, &mut report)?;
        self.reset_build_artifacts(&mut report)?;

        Ok(report)
    }

    /// 3 表記いずれかを含むファイルの内容を置換する
    fn replace_contents(
        &self,
        to: &IdentifierTriple,
        report: &mut RenameReport,
    ) -> Result<(), RenameError> {
        let mut candidates = BTreeSet::new();
        for pattern in self.from.forms() {
            let found = self.finder.find_files_by_content(pattern).map_err(|source| {
                RenameError::Enumeration {
                    pattern: pattern.to_string(),
                    source,
                }
            })?;
            candidates.extend(found);
        }

        for path in candidates {
            if !self.workspace.is_file(&path) {
                tracing::debug!(path = %path.display(), "通常のファイルではないため対象外です");
                continue;
            }

            let text = match self.workspace.read_text(&path)? {
                TextContent::Text(text) => text,
                TextContent::Binary => {
                    tracing::warn!(path = %path.display(), "バイナリファイルをスキップしました");
                    report.skipped.push(path);
                    continue;
                }
            };

            let replaced = self.from.substitute(to, &text);
            if replaced != text {
                self.workspace.write_text(&path, &replaced)?;
                tracing::info!(path = %path.display(), "内容を更新しました");
                report.updated.push(path);
            }
        }

        Ok(())
    }

    /// 名前に snake_case 表記を含むファイル・ディレクトリを深い順に変更する
    fn rename_paths(
        &self,
        to: &IdentifierTriple,
        report: &mut RenameReport,
    ) -> Result<(), RenameError> {
        let pattern = self.from.snake();
        let paths = self
            .finder
            .find_paths_by_name(pattern)
            .map_err(|source| RenameError::Enumeration {
                pattern: pattern.to_string(),
                source,
            })?;

        for rename in plan_path_renames(pattern, to.snake(), paths) {
            self.workspace.move_path(&rename.from, &rename.to)?;
            tracing::info!(
                from = %rename.from.display(),
                to = %rename.to.display(),
                "名前を変更しました"
            );
            report.renamed.push(rename);
        }

        Ok(())
    }

    /// ビルドディレクトリとロックファイルを削除する
    fn reset_build_artifacts(&self, report: &mut RenameReport) -> Result<(), RenameError> {
        if self.workspace.remove_dir_if_exists(&self.reset.build_dir)? {
            tracing::info!(path = %self.reset.build_dir.display(), "ビルドディレクトリを削除しました");
            report.removed.push(self.reset.build_dir.clone());
        }

        if self.workspace.remove_file_if_exists(&self.reset.lock_file)? {
            tracing::info!(path = %self.reset.lock_file.display(), "ロックファイルを削除しました");
            report.removed.push(self.reset.lock_file.clone());
        }

        Ok(())
    }
}
