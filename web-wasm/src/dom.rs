//! DOMへの描画
//!
//! ページ上の `#header` / `#tabs` / `#menu` を描画先として扱う。

use menu_board_common::{Region, RenderSink};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

pub struct DomSink {
    document: Document,
}

impl DomSink {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl RenderSink for DomSink {
    fn set_markup(&mut self, region: Region, markup: &str) {
        match self.document.get_element_by_id(region.element_id()) {
            Some(element) => element.set_inner_html(markup),
            None => gloo::console::warn!(format!("描画先が見つかりません: #{}", region.element_id())),
        }
    }
}

/// クリックされたタブのカテゴリキー
pub fn tab_key(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let tab = target.closest(".tab").ok()??;
    tab.get_attribute("data-category")
}
