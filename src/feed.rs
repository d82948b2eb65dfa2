//! CSVフィードの取得
//!
//! `http(s)://` はHTTPで取得し、それ以外はローカルファイルとして読む。

use crate::error::{MenuBoardError, Result};
use menu_board_common::MenuTable;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            FeedSource::Url(trimmed.to_string())
        } else {
            FeedSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Url(url) => write!(f, "{}", url),
            FeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// フィード本文を取得
pub async fn fetch_feed(source: &FeedSource) -> Result<String> {
    match source {
        FeedSource::File(path) => {
            if !path.exists() {
                return Err(MenuBoardError::FeedNotFound(path.display().to_string()));
            }
            tracing::debug!(path = %path.display(), "フィードファイルを読み込み");
            Ok(std::fs::read_to_string(path)?)
        }
        FeedSource::Url(url) => {
            tracing::debug!(url = %url, "フィードを取得");
            let response = reqwest::get(url)
                .await
                .map_err(|e| MenuBoardError::Fetch(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(MenuBoardError::Fetch(format!("HTTP {}", status)));
            }

            response
                .text()
                .await
                .map_err(|e| MenuBoardError::Fetch(e.to_string()))
        }
    }
}

/// フィードを取得してCSVとして解析（取得エラーはそのまま返す）
pub async fn load_feed(source: &FeedSource) -> Result<MenuTable> {
    let content = fetch_feed(source).await?;
    Ok(MenuTable::from_csv_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            FeedSource::parse("https://example.com/menu.csv"),
            FeedSource::Url("https://example.com/menu.csv".to_string())
        );
        assert_eq!(
            FeedSource::parse(" menu.csv "),
            FeedSource::File(PathBuf::from("menu.csv"))
        );
    }
}
