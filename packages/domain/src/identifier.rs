//! # プロジェクト識別子
//!
//! プロジェクト名と、そこから導出される 3 種類の表記を扱う。
//!
//! ## 表記の導出規則
//!
//! 呼び出し元から受け取る kebab-case を正とし、他の 2 表記は決定的に導出する。
//! 導出結果を個別に保持・永続化することはない。
//!
//! | 表記 | 規則 | 例 |
//! |------|------|----|
//! | kebab-case | 入力そのまま | `my-awesome-api` |
//! | snake_case | `-` を `_` に置換（それ以外は変更しない） | `my_awesome_api` |
//! | Title Case | `-` で分割し、各語の先頭を大文字・残りを小文字にして空白で連結 | `My Awesome Api` |
//!
//! ## ベースライン
//!
//! テンプレートが出荷時に持つ名前は固定値である（[`IdentifierTriple::baseline`]）。
//! Title Case は導出規則に従わない `FastAPI Template` である点に注意。

use std::fmt;

use crate::DomainError;

/// テンプレートの kebab-case 名
pub const BASELINE_KEBAB: &str = "fastapi-template";
/// テンプレートの snake_case 名
pub const BASELINE_SNAKE: &str = "fastapi_template";
/// テンプレートの Title Case 名
pub const BASELINE_TITLE: &str = "FastAPI Template";

/// 検証済みのプロジェクト名（kebab-case）
///
/// # 不変条件
///
/// - 空でない
/// - ASCII 英数字、`-`、`_` のみで構成される（空白・パス区切り文字を含まない）
/// - `-` で区切った各セグメントが空でない（先頭・末尾・連続ハイフンを拒否）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// 文字列からプロジェクト名を作成する
    ///
    /// # エラー
    ///
    /// 不変条件を満たさない場合は [`DomainError::Validation`] を返す。
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "プロジェクト名は必須です".to_string(),
            ));
        }

        if let Some(invalid) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(DomainError::Validation(format!(
                "プロジェクト名に使用できない文字が含まれています: {invalid:?}"
            )));
        }

        if value.split('-').any(str::is_empty) {
            return Err(DomainError::Validation(format!(
                "プロジェクト名のハイフン区切りに空のセグメントがあります: {value}"
            )));
        }

        Ok(Self(value))
    }

    /// kebab-case 表記を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// snake_case 表記を導出する
    pub fn to_snake_case(&self) -> String {
        self.0.replace('-', "_")
    }

    /// Title Case 表記を導出する
    pub fn to_title_case(&self) -> String {
        self.0
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 先頭文字を大文字、残りを小文字にする
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// 1 つのプロジェクト名が持つ 3 種類の表記
///
/// 置換は常にこの 3 つ組単位で行う。3 表記は区切り文字・大文字小文字・空白が
/// 互いに異なるため、ある表記の置換結果が別の表記に新たに一致することはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierTriple {
    kebab: String,
    snake: String,
    title: String,
}

impl IdentifierTriple {
    /// テンプレートが出荷時に持つ名前の 3 つ組
    pub fn baseline() -> Self {
        Self {
            kebab: BASELINE_KEBAB.to_string(),
            snake: BASELINE_SNAKE.to_string(),
            title: BASELINE_TITLE.to_string(),
        }
    }

    /// プロジェクト名から 3 つ組を導出する
    pub fn from_name(name: &ProjectName) -> Self {
        Self {
            kebab: name.as_str().to_string(),
            snake: name.to_snake_case(),
            title: name.to_title_case(),
        }
    }

    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    pub fn snake(&self) -> &str {
        &self.snake
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 内容検索に使う 3 表記（kebab, snake, title の順）
    pub fn forms(&self) -> [&str; 3] {
        [&self.kebab, &self.snake, &self.title]
    }

    /// `content` 中の自身の 3 表記を `to` の対応する表記に置換する
    ///
    /// 単純な部分文字列置換であり、単語境界は考慮しない。
    pub fn substitute(&self, to: &Self, content: &str) -> String {
        content
            .replace(&self.kebab, &to.kebab)
            .replace(&self.snake, &to.snake)
            .replace(&self.title, &to.title)
    }
}

impl fmt::Display for IdentifierTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.kebab, self.snake, self.title)
    }
}
