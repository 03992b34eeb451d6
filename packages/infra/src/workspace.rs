//! # プロジェクトルート配下のファイル操作
//!
//! リネーム処理が行う読み取り・書き込み・移動・削除をまとめる。
//! 引数のパスはすべてルートからの相対パスとして解釈する。

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::InfraError;

/// ファイル内容の読み取り結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextContent {
    /// UTF-8 として読み取れた
    Text(String),
    /// UTF-8 として読み取れなかった（バイナリとして扱う）
    Binary,
}

/// プロジェクトルートに対するファイル操作
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 相対パスを絶対パスに解決する
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// 通常のファイルか（シンボリックリンクは辿る）
    pub fn is_file(&self, relative: &Path) -> bool {
        self.resolve(relative).is_file()
    }

    /// ファイルを UTF-8 テキストとして読み取る
    pub fn read_text(&self, relative: &Path) -> Result<TextContent, InfraError> {
        let path = self.resolve(relative);
        let bytes = fs::read(&path).map_err(|e| InfraError::io(&path, e))?;

        Ok(match String::from_utf8(bytes) {
            Ok(text) => TextContent::Text(text),
            Err(_) => TextContent::Binary,
        })
    }

    /// ファイルの内容を書き換える
    pub fn write_text(&self, relative: &Path, content: &str) -> Result<(), InfraError> {
        let path = self.resolve(relative);
        fs::write(&path, content).map_err(|e| InfraError::io(&path, e))
    }

    /// ファイル・ディレクトリを移動する
    ///
    /// 移動先が既に存在する場合は上書きせず [`InfraError::AlreadyExists`] を返す。
    /// 移動先の親ディレクトリが存在しなければ作成する。
    pub fn move_path(&self, from: &Path, to: &Path) -> Result<(), InfraError> {
        let source = self.resolve(from);
        let target = self.resolve(to);

        if fs::symlink_metadata(&target).is_ok() {
            return Err(InfraError::AlreadyExists { path: target });
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| InfraError::io(parent, e))?;
        }

        fs::rename(&source, &target).map_err(|e| InfraError::io(&source, e))
    }

    /// ディレクトリを配下ごと削除する
    ///
    /// 削除した場合は `true`、存在しなかった場合は `false` を返す。
    pub fn remove_dir_if_exists(&self, relative: &Path) -> Result<bool, InfraError> {
        let path = self.resolve(relative);
        ignore_not_found(fs::remove_dir_all(&path)).map_err(|e| InfraError::io(&path, e))
    }

    /// ファイルを削除する
    ///
    /// 削除した場合は `true`、存在しなかった場合は `false` を返す。
    pub fn remove_file_if_exists(&self, relative: &Path) -> Result<bool, InfraError> {
        let path = self.resolve(relative);
        ignore_not_found(fs::remove_file(&path)).map_err(|e| InfraError::io(&path, e))
    }
}

fn ignore_not_found(result: io::Result<()>) -> io::Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
