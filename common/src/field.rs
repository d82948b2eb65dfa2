//! 列名解決モジュール
//!
//! スプレッドシートの見出し揺れ（大文字小文字・空白）を吸収して、
//! 論理フィールド名から実際の列を引く。
//! 見出しインデックスは読み込みバッチごとに一度だけ構築し、全行で共有する。

use crate::error::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// 見出しの照合方式
pub trait HeaderMatcher: Send + Sync {
    /// 比較用のキーを返す（見出し・論理名の両方に適用される）
    fn key(&self, name: &str) -> String;
}

/// 小文字化 + 連続空白を1つに + 前後空白除去
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedMatcher;

impl HeaderMatcher for NormalizedMatcher {
    fn key(&self, name: &str) -> String {
        normalize_header(name)
    }
}

/// 前後空白のみ除去する厳密照合
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl HeaderMatcher for ExactMatcher {
    fn key(&self, name: &str) -> String {
        name.trim().to_string()
    }
}

/// 見出しを比較用に正規化
pub fn normalize_header(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// フィードの論理列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Group,
    Category,
    NameJp,
    NameEn,
    NameZh,
    DescriptionJp,
    DescriptionEn,
    DescriptionZh,
    Price,
    ImageUrl,
    Takeout,
    NoteJp,
    Visible,
}

impl Field {
    /// 想定している見出し名
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Group => "Group",
            Field::Category => "Category",
            Field::NameJp => "Name (JP)",
            Field::NameEn => "Name (EN)",
            Field::NameZh => "Name (ZH)",
            Field::DescriptionJp => "Description (JP)",
            Field::DescriptionEn => "Description (EN)",
            Field::DescriptionZh => "Description (ZH)",
            Field::Price => "Price",
            Field::ImageUrl => "Image URL",
            Field::Takeout => "Takeout",
            Field::NoteJp => "Note (JP)",
            Field::Visible => "Visible",
        }
    }
}

/// 見出しキー → 列番号のインデックス
pub struct HeaderIndex {
    headers: Vec<String>,
    positions: HashMap<String, usize>,
    matcher: Box<dyn HeaderMatcher>,
}

impl HeaderIndex {
    pub fn new(headers: Vec<String>) -> Self {
        Self::with_matcher(headers, Box::new(NormalizedMatcher))
    }

    /// 同じキーになる見出しが複数ある場合は先頭の列を採用
    pub fn with_matcher(headers: Vec<String>, matcher: Box<dyn HeaderMatcher>) -> Self {
        let mut positions = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            positions.entry(matcher.key(header)).or_insert(i);
        }
        Self { headers, positions, matcher }
    }

    pub fn position(&self, wanted: &str) -> Option<usize> {
        self.positions.get(&self.matcher.key(wanted)).copied()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl std::fmt::Debug for HeaderIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderIndex")
            .field("headers", &self.headers)
            .finish()
    }
}

/// CSVの1行
#[derive(Debug, Clone)]
pub struct MenuRow {
    index: Arc<HeaderIndex>,
    values: Vec<String>,
}

impl MenuRow {
    pub fn new(index: Arc<HeaderIndex>, values: Vec<String>) -> Self {
        Self { index, values }
    }

    /// 論理名で値を取得（見つからなければ空文字）
    pub fn get(&self, wanted: &str) -> &str {
        self.index
            .position(wanted)
            .and_then(|i| self.values.get(i))
            .map(|v| v.trim())
            .unwrap_or("")
    }

    pub fn field(&self, field: Field) -> &str {
        self.get(field.column_name())
    }
}

/// 読み込んだCSV全体（1バッチ）
#[derive(Debug, Clone)]
pub struct MenuTable {
    index: Arc<HeaderIndex>,
    rows: Vec<MenuRow>,
}

impl MenuTable {
    /// CSV文字列から読み込み（空行は `csv` のリーダーが読み飛ばす。列数不足の行も許容）
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_str_with(content, Box::new(NormalizedMatcher))
    }

    pub fn from_csv_str_with(content: &str, matcher: Box<dyn HeaderMatcher>) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let index = Arc::new(HeaderIndex::with_matcher(headers, matcher));

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let values = record.iter().map(str::to_string).collect();
            rows.push(MenuRow::new(Arc::clone(&index), values));
        }

        tracing::debug!(columns = index.headers().len(), rows = rows.len(), "CSVを読み込みました");
        Ok(Self { index, rows })
    }

    /// CSVファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_csv_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_csv_str(&content)
    }

    pub fn rows(&self) -> &[MenuRow] {
        &self.rows
    }

    pub fn headers(&self) -> &[String] {
        self.index.headers()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
