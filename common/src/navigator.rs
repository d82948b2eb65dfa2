//! カテゴリナビゲーション
//!
//! 読み込み済みの項目からカテゴリを導出してタブを描画し、
//! 選択中のカテゴリに絞ったメニュー一覧を描画する。
//! 描画先は [`RenderSink`] として注入する（ブラウザではDOM、CLI・テストではメモリ）。

use crate::catalog;
use crate::item::MenuItem;
use crate::language::Language;
use crate::render;
use std::collections::HashMap;

/// 描画領域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Header,
    Tabs,
    Menu,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Header, Region::Tabs, Region::Menu];

    /// ページ上の要素ID
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Tabs => "tabs",
            Region::Menu => "menu",
        }
    }
}

/// 領域ごとにマークアップを丸ごと差し替える描画先
pub trait RenderSink {
    fn set_markup(&mut self, region: Region, markup: &str);
}

/// メモリ上の描画先
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    regions: HashMap<Region, String>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// 書き込み回数
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RenderSink for MemorySink {
    fn set_markup(&mut self, region: Region, markup: &str) {
        self.regions.insert(region, markup.to_string());
        self.writes += 1;
    }
}

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// タブのクリック
    SelectCategory(String),
}

/// 空でないカテゴリを出現順に重複なく列挙
pub fn compute_categories(items: &[MenuItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// 1ページ分の表示状態
#[derive(Debug, Clone)]
pub struct MenuSession {
    lang: Language,
    items: Vec<MenuItem>,
    current: Option<String>,
}

impl MenuSession {
    pub fn new(lang: Language) -> Self {
        Self {
            lang,
            items: Vec::new(),
            current: None,
        }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub(crate) fn set_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.current = None;
    }

    pub fn current_category(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// タブの表示順に並べたカテゴリ
    pub fn categories(&self) -> Vec<String> {
        catalog::order_categories(&compute_categories(&self.items))
    }

    /// 選択中カテゴリの項目
    pub fn visible_items(&self) -> Vec<&MenuItem> {
        match &self.current {
            Some(current) => self.items.iter().filter(|i| &i.category == current).collect(),
            None => Vec::new(),
        }
    }

    /// カテゴリを選択してタブと一覧を描画し直す
    pub fn select_category(&mut self, key: &str, sink: &mut dyn RenderSink) {
        tracing::debug!(category = key, lang = %self.lang, "カテゴリを選択");
        self.current = Some(key.to_string());

        let tabs = render::tabs_html(&self.categories(), key, self.lang);
        sink.set_markup(Region::Tabs, &tabs);

        let menu = render::menu_list_html(self.visible_items(), self.lang);
        sink.set_markup(Region::Menu, &menu);
    }

    pub fn dispatch(&mut self, command: Command, sink: &mut dyn RenderSink) {
        match command {
            Command::SelectCategory(key) => self.select_category(&key, sink),
        }
    }
}
