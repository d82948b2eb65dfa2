//! ページの起動処理
//!
//! 言語パラメータを読み、フィードを取得して初回描画を行い、
//! タブのクリックをカテゴリ選択コマンドとしてセッションに渡す。

use crate::dom::{self, DomSink};
use gloo::events::EventListener;
use gloo::net::http::Request;
use menu_board_common::{Command, Error, Language, MenuSession, Result, DEFAULT_FEED_URL};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, UrlSearchParams};

/// `?lang=` から表示言語を決定
pub fn lang_from_location() -> Language {
    let param = gloo::utils::window()
        .location()
        .search()
        .ok()
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("lang"));
    Language::from_param(param.as_deref())
}

/// フィードCSVを取得
pub async fn fetch_feed(url: &str) -> Result<String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(Error::Fetch(format!("HTTP {}", response.status())));
    }

    response.text().await.map_err(|e| Error::Fetch(e.to_string()))
}

/// タブ領域にクリックの委譲リスナーを登録
pub fn bind_tabs(document: &Document, session: Rc<RefCell<MenuSession>>) {
    let Some(tabs) = document.get_element_by_id("tabs") else {
        gloo::console::warn!("タブ領域 #tabs がありません");
        return;
    };

    let document = document.clone();
    EventListener::new(&tabs, "click", move |event| {
        if let Some(key) = dom::tab_key(event) {
            let mut sink = DomSink::new(document.clone());
            session.borrow_mut().dispatch(Command::SelectCategory(key), &mut sink);
        }
    })
    .forget();
}

pub fn start() {
    let lang = lang_from_location();
    let document = gloo::utils::document();
    let session = Rc::new(RefCell::new(MenuSession::new(lang)));

    bind_tabs(&document, Rc::clone(&session));

    spawn_local(async move {
        let feed = fetch_feed(DEFAULT_FEED_URL).await;
        if let Err(e) = &feed {
            gloo::console::error!(e.to_string());
        }

        let mut sink = DomSink::new(document);
        session.borrow_mut().load(feed, &mut sink);
    });
}
