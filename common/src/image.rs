//! 画像URLの正規化
//!
//! クラウドストレージの共有リンクを、そのまま `<img>` に使える
//! サムネイルURLに変換する。直リンクはそのまま返す。

use regex::Regex;

/// 共有ファイルIDから表示用URLを組み立てる
pub fn thumbnail_url(id: &str) -> String {
    format!("https://drive.google.com/thumbnail?id={}&sz=w1000", id)
}

/// 共有リンクからファイルIDを取り出す
///
/// 1. `.../file/d/<ID>/view?...`
/// 2. `...?id=<ID>` / `...&id=<ID>`
pub fn extract_share_id(url: &str) -> Option<&str> {
    lazy_static::lazy_static! {
        static ref FILE_PATH_RE: Regex = Regex::new(r"/file/d/([^/?#&]+)").unwrap();
        static ref ID_PARAM_RE: Regex = Regex::new(r"[?&]id=([^&#]+)").unwrap();
    }

    FILE_PATH_RE
        .captures(url)
        .or_else(|| ID_PARAM_RE.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 画像URLを表示用に正規化
pub fn normalize_image_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    match extract_share_id(url) {
        Some(id) => thumbnail_url(id),
        None => url.to_string(),
    }
}
