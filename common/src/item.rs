//! メニュー項目の型定義
//!
//! CSVの1行を論理フィールドに展開したもの。欠けた列は空文字になる。

use crate::field::{Field, MenuRow};
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// 非表示とみなす Visible 列の値（小文字化後に比較）
pub const HIDDEN_TOKENS: &[&str] = &["×", "✗", "x", "no", "0", "false"];

/// 言語別テキスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localized {
    pub jp: String,
    pub en: String,
    pub zh: String,
}

impl Localized {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Jp => &self.jp,
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }
}

/// メニュー項目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    /// Group列（なければCategory列）
    pub category: String,
    /// Category列
    pub subcategory: String,
    pub name: Localized,
    pub description: Localized,
    /// 価格（未整形）
    pub price: String,
    /// 画像URL（未正規化）
    pub image_url: String,
    pub takeout: String,
    /// 備考（日本語のみ）
    pub note_jp: String,
    pub visible: String,
}

impl MenuItem {
    pub fn from_row(row: &MenuRow) -> Self {
        let group = row.field(Field::Group);
        let subcategory = row.field(Field::Category);
        let category = if group.is_empty() { subcategory } else { group };

        Self {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            name: Localized {
                jp: row.field(Field::NameJp).to_string(),
                en: row.field(Field::NameEn).to_string(),
                zh: row.field(Field::NameZh).to_string(),
            },
            description: Localized {
                jp: row.field(Field::DescriptionJp).to_string(),
                en: row.field(Field::DescriptionEn).to_string(),
                zh: row.field(Field::DescriptionZh).to_string(),
            },
            price: row.field(Field::Price).to_string(),
            image_url: row.field(Field::ImageUrl).to_string(),
            takeout: row.field(Field::Takeout).to_string(),
            note_jp: row.field(Field::NoteJp).to_string(),
            visible: row.field(Field::Visible).to_string(),
        }
    }

    /// Visible列が非表示トークンでなければ表示
    pub fn is_visible(&self) -> bool {
        let token = self.visible.trim().to_lowercase();
        !HIDDEN_TOKENS.contains(&token.as_str())
    }

    pub fn is_takeout(&self) -> bool {
        self.takeout.to_lowercase().contains("ok")
    }

    /// サブカテゴリ（カテゴリと同じ・空なら None）
    pub fn distinct_subcategory(&self) -> Option<&str> {
        if self.subcategory.is_empty() || self.subcategory == self.category {
            None
        } else {
            Some(&self.subcategory)
        }
    }
}
