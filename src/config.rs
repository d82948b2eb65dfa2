use crate::error::{MenuBoardError, Result};
use menu_board_common::{Language, DEFAULT_FEED_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// フィードURLを上書きする環境変数
pub const FEED_URL_ENV: &str = "MENU_BOARD_FEED_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed_url: String,
    pub default_lang: Language,
    /// ページタイトル（未設定なら言語別の店名）
    pub page_title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.into(),
            default_lang: Language::Jp,
            page_title: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuBoardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("menu-board").join("config.json"))
    }

    /// 使用するフィード（環境変数を優先）
    pub fn feed_url(&self) -> String {
        match std::env::var(FEED_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.feed_url.clone(),
        }
    }

    pub fn set_feed_url(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(MenuBoardError::Config("フィードURLが空です".into()));
        }
        self.feed_url = url;
        self.save()
    }
}
