//! 価格表記の整形
//!
//! - 単位語（グラス・ボトル・ポット）の翻訳
//! - 金額の数字に「￥」を付与（`300ml` のような容量は対象外）
//! - `/` 区切りは複数価格として1つずつブロック化

use crate::language::Language;
use regex::Regex;

pub const YEN: &str = "￥";

/// 単位語を表示言語に置換
pub fn translate_units(text: &str, lang: Language) -> String {
    lang.unit_words()
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// 数字の並び（桁区切りのカンマを含む）に円記号を付ける
///
/// 直後に（空白を挟んで）`ml` が続く数字は容量なので付けない。
pub fn annotate_yen(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref AMOUNT_RE: Regex = Regex::new(r"[0-9][0-9,]*").unwrap();
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in AMOUNT_RE.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if !is_volume(&text[m.end()..]) {
            out.push_str(YEN);
        }
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

fn is_volume(rest: &str) -> bool {
    rest.trim_start().starts_with("ml")
}

/// 価格文字列をマークアップに整形
pub fn format_price(raw: &str, lang: Language) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if raw.contains('/') {
        raw.split('/')
            .map(|part| {
                let formatted = annotate_yen(&translate_units(part.trim(), lang));
                format!(r#"<div class="price">{}</div>"#, formatted)
            })
            .collect()
    } else {
        let formatted = annotate_yen(&translate_units(raw, lang));
        format!(r#"<p class="price">{}</p>"#, formatted)
    }
}
