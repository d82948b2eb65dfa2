//! メニュー読み込み
//!
//! フィード取得の完了（成功・失敗）を受けて、表示状態を初期化する。
//!
//! ## 処理フロー
//! 1. 取得失敗 → 失敗メッセージのみ表示
//! 2. 中国語 → 準備中表示で終了
//! 3. 非表示行を除外してカテゴリを導出
//! 4. 先頭カテゴリを選択（なければ「メニューなし」）

use crate::error::Result;
use crate::field::MenuTable;
use crate::item::MenuItem;
use crate::language::Language;
use crate::navigator::{compute_categories, MenuSession, Region, RenderSink};
use crate::render;

/// 公開スプレッドシートのCSV
pub const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR7Rdo_eCMQF-HTxCjdZJDx6z8OQnYjc0WTVwuc_N6TNYpdwfFy5DLRmW35gbLZklPcuSGxmmGfafeT/pub?output=csv";

/// 読み込み結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 先頭カテゴリを表示した
    Ready { category: String, items: usize },
    /// 表示できる項目がない
    Empty,
    /// 中国語メニュー準備中
    Stub,
    /// 取得・解析に失敗
    Failed(String),
}

/// CSVを項目に展開し、非表示行を除外する
pub fn visible_items(table: &MenuTable) -> Vec<MenuItem> {
    table
        .rows()
        .iter()
        .map(MenuItem::from_row)
        .filter(MenuItem::is_visible)
        .collect()
}

impl MenuSession {
    /// フィード本文（または取得エラー）から表示を初期化
    pub fn load(&mut self, feed: Result<String>, sink: &mut dyn RenderSink) -> LoadOutcome {
        match feed.and_then(|content| MenuTable::from_csv_str(&content)) {
            Ok(table) => self.load_table(&table, sink),
            Err(e) => self.fail(&e.to_string(), sink),
        }
    }

    /// 読み込み失敗を表示（メニュー領域のみ書き換え、ヘッダーとタブはそのまま）
    pub fn fail(&mut self, reason: &str, sink: &mut dyn RenderSink) -> LoadOutcome {
        tracing::warn!(error = %reason, "メニューの読み込みに失敗");
        self.set_items(Vec::new());
        sink.set_markup(Region::Menu, &render::message_html(self.lang().failure_message()));
        LoadOutcome::Failed(reason.to_string())
    }

    /// 解析済みのCSVから表示を初期化
    pub fn load_table(&mut self, table: &MenuTable, sink: &mut dyn RenderSink) -> LoadOutcome {
        let lang = self.lang();

        if lang == Language::Zh {
            sink.set_markup(Region::Header, &render::header_html(lang));
            sink.set_markup(Region::Menu, &render::stub_notice_html());
            return LoadOutcome::Stub;
        }

        sink.set_markup(Region::Header, &render::header_html(lang));

        let items = visible_items(table);
        tracing::info!(
            total = table.len(),
            visible = items.len(),
            "メニューを読み込みました"
        );
        let first = compute_categories(&items).into_iter().next();
        self.set_items(items);

        match first {
            Some(category) => {
                self.select_category(&category, sink);
                let count = self.visible_items().len();
                LoadOutcome::Ready { category, items: count }
            }
            None => {
                sink.set_markup(Region::Menu, &render::message_html(lang.empty_message()));
                LoadOutcome::Empty
            }
        }
    }
}
