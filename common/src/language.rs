//! 表示言語と固定文言
//!
//! 言語は起動時に一度だけ決まり、セッション中は変わらない。

use serde::{Deserialize, Serialize};

/// 表示言語（日本語 / 英語 / 中国語）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Jp,
    En,
    Zh,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Jp, Language::En, Language::Zh];

    /// 外部パラメータから言語を決定（不明・未指定は日本語）
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("en") => Language::En,
            Some("zh") => Language::Zh,
            _ => Language::Jp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Jp => "jp",
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// `<html lang>` 用のタグ
    pub fn html_lang(&self) -> &'static str {
        match self {
            Language::Jp => "ja",
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// ヘッダー（店名 + サブタイトル）
    pub fn header_title(&self) -> (&'static str, &'static str) {
        match self {
            Language::Jp => ("いちのや料理メニュー", "うなぎ料理専門店"),
            Language::En => ("Ichinoya Menu", "Unagi Restaurant Menu"),
            Language::Zh => ("一之屋 菜单", "鳗鱼料理专门店"),
        }
    }

    pub fn takeout_badge(&self) -> &'static str {
        match self {
            Language::Jp => "テイクアウト可",
            Language::En => "Takeout OK",
            Language::Zh => "可外带",
        }
    }

    /// カテゴリ一覧の先頭に出す注意書き
    pub fn menu_notice(&self) -> &'static str {
        match self {
            Language::Jp => "※ 表示価格は税込みです。写真はイメージです。ご飯大盛りは160円です。",
            Language::En => "※ Prices include tax. Photos are for illustration only. Large rice +¥160.",
            Language::Zh => "※ 价格含税，图片仅供参考。加大饭需加160日元。",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Language::Jp => "メニューがありません。",
            Language::En => "No menu items are available.",
            Language::Zh => "暂无菜单。",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Language::Jp => "メニューの読み込みに失敗しました。",
            Language::En => "Failed to load the menu.",
            Language::Zh => "菜单加载失败。",
        }
    }

    /// 価格表記の単位語を置換する（日本語は対象外）
    pub fn unit_words(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Jp => &[],
            Language::En => &[("グラス", "Glass"), ("ボトル", "Bottle"), ("ポット", "Pot")],
            Language::Zh => &[("グラス", "杯"), ("ボトル", "瓶"), ("ポット", "壶")],
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jp" | "ja" => Ok(Language::Jp),
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            _ => Err(format!("Unknown language: {}. Use jp, en, or zh", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
