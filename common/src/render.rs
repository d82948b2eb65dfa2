//! HTML断片の生成
//!
//! ヘッダー・タブ・メニューカードのマークアップを組み立てる。
//! 欠けている項目は空要素になるだけで、エラーにはしない。

use crate::catalog;
use crate::image::normalize_image_url;
use crate::item::MenuItem;
use crate::language::Language;
use crate::price::format_price;

/// 属性値のエスケープ
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// テキストノードとして表示する値のエスケープ
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn header_html(lang: Language) -> String {
    let (title, subtitle) = lang.header_title();
    format!(r#"<h1>{}<br><span class="en">{}</span></h1>"#, title, subtitle)
}

/// 中国語メニュー準備中の案内
pub fn stub_notice_html() -> String {
    concat!(
        r#"<div class="note stub">"#,
        "<p>中文菜单正在制作中。</p>",
        "<p>Please check the Japanese or English menu.</p>",
        "</div>",
    )
    .to_string()
}

pub fn message_html(message: &str) -> String {
    format!("<p>{}</p>", message)
}

/// カテゴリタブ（`data-category` にキーを持たせる）
pub fn tabs_html(ordered: &[String], current: &str, lang: Language) -> String {
    ordered
        .iter()
        .map(|key| {
            let class = if key == current { "tab active" } else { "tab" };
            format!(
                r#"<div class="{}" data-category="{}">{}</div>"#,
                class,
                escape_attr(key),
                escape_text(catalog::label(key, lang))
            )
        })
        .collect()
}

/// 注意書き + カード一覧
pub fn menu_list_html<'a>(items: impl IntoIterator<Item = &'a MenuItem>, lang: Language) -> String {
    let mut html = format!(r#"<div class="note">{}</div>"#, lang.menu_notice());
    for item in items {
        html.push_str(&card_html(item, lang));
    }
    html
}

fn image_html(item: &MenuItem) -> String {
    let src = normalize_image_url(&item.image_url);
    if src.is_empty() {
        return String::new();
    }
    let alt = if item.name.en.is_empty() { &item.name.jp } else { &item.name.en };
    format!(
        r#"<img src="{}" loading="lazy" alt="{}" onerror="this.style.display='none'">"#,
        escape_attr(&src),
        escape_attr(alt)
    )
}

fn category_line_html(item: &MenuItem, lang: Language) -> String {
    if item.category.is_empty() {
        return String::new();
    }
    let label = catalog::label(&item.category, lang);
    match item.distinct_subcategory() {
        Some(sub) => format!(r#"<div class="cat">{} - {}</div>"#, label, sub),
        None => format!(r#"<div class="cat">{}</div>"#, label),
    }
}

/// メニューカード1件
pub fn card_html(item: &MenuItem, lang: Language) -> String {
    let jp_sub = if lang != Language::Jp && !item.name.jp.is_empty() {
        format!(r#"<div class="jp-sub">{}</div>"#, item.name.jp)
    } else {
        String::new()
    };

    let badge = if item.is_takeout() {
        format!(r#"<span class="takeout-badge">{}</span>"#, lang.takeout_badge())
    } else {
        String::new()
    };

    let note = if lang == Language::Jp && !item.note_jp.is_empty() {
        format!(r#"<p class="note-sub">{}</p>"#, item.note_jp)
    } else {
        String::new()
    };

    format!(
        concat!(
            r#"<div class="menu-item">"#,
            r#"<div class="menu-img">{img}</div>"#,
            r#"<div class="menu-text">"#,
            "{cat}<h2>{title}</h2>{jp_sub}{badge}<p>{desc}</p>{note}{price}",
            "</div></div>",
        ),
        img = image_html(item),
        cat = category_line_html(item, lang),
        title = item.name.get(lang),
        jp_sub = jp_sub,
        badge = badge,
        desc = item.description.get(lang),
        note = note,
        price = format_price(&item.price, lang),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Localized;

    fn unaju() -> MenuItem {
        MenuItem {
            category: "うなぎ料理".to_string(),
            subcategory: "うな重".to_string(),
            name: Localized {
                jp: "うな重".to_string(),
                en: "Unaju".to_string(),
                zh: String::new(),
            },
            description: Localized {
                jp: "国産うなぎ".to_string(),
                en: "Domestic eel".to_string(),
                zh: String::new(),
            },
            price: "3800".to_string(),
            image_url: "https://drive.google.com/file/d/IMG1/view".to_string(),
            takeout: "ok".to_string(),
            note_jp: "数量限定".to_string(),
            visible: String::new(),
        }
    }

    #[test]
    fn test_card_jp() {
        let html = card_html(&unaju(), Language::Jp);
        assert!(html.contains(r#"<div class="cat">うなぎ料理 - うな重</div>"#));
        assert!(html.contains("<h2>うな重</h2>"));
        assert!(!html.contains("jp-sub"));
        assert!(html.contains("テイクアウト可"));
        assert!(html.contains("<p>国産うなぎ</p>"));
        assert!(html.contains(r#"<p class="note-sub">数量限定</p>"#));
        assert!(html.contains(r#"<p class="price">￥3800</p>"#));
        assert!(html.contains("id=IMG1"));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(r#"alt="Unaju""#));
    }

    #[test]
    fn test_card_en() {
        let html = card_html(&unaju(), Language::En);
        assert!(html.contains(r#"<div class="cat">Unagi Dishes - うな重</div>"#));
        assert!(html.contains("<h2>Unaju</h2>"));
        assert!(html.contains(r#"<div class="jp-sub">うな重</div>"#));
        assert!(html.contains("Takeout OK"));
        assert!(html.contains("<p>Domestic eel</p>"));
        assert!(!html.contains("数量限定"));
    }

    #[test]
    fn test_card_segment_order() {
        let html = card_html(&unaju(), Language::En);
        let positions: Vec<usize> = ["<img", "class=\"cat\"", "<h2>", "jp-sub", "takeout-badge", "<p>Domestic", "class=\"price\""]
            .iter()
            .map(|needle| html.find(needle).expect(needle))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", html);
    }

    #[test]
    fn test_card_missing_fields() {
        let html = card_html(&MenuItem::default(), Language::En);
        assert_eq!(
            html,
            r#"<div class="menu-item"><div class="menu-img"></div><div class="menu-text"><h2></h2><p></p></div></div>"#
        );
    }

    #[test]
    fn test_subcategory_same_as_category_hidden() {
        let item = MenuItem {
            category: "サラダ".to_string(),
            subcategory: "サラダ".to_string(),
            ..Default::default()
        };
        assert!(card_html(&item, Language::Jp).contains(r#"<div class="cat">サラダ</div>"#));
    }

    #[test]
    fn test_alt_falls_back_to_jp() {
        let item = MenuItem {
            name: Localized { jp: "肝焼き".to_string(), ..Default::default() },
            image_url: "https://cdn.example.com/kimo.jpg".to_string(),
            ..Default::default()
        };
        let html = card_html(&item, Language::Jp);
        assert!(html.contains(r#"src="https://cdn.example.com/kimo.jpg""#));
        assert!(html.contains(r#"alt="肝焼き""#));
    }

    #[test]
    fn test_tabs_html() {
        let ordered = vec!["うなぎ料理".to_string(), "ビール".to_string()];
        let html = tabs_html(&ordered, "ビール", Language::En);
        assert_eq!(
            html,
            concat!(
                r#"<div class="tab" data-category="うなぎ料理">Unagi Dishes</div>"#,
                r#"<div class="tab active" data-category="ビール">Beer</div>"#,
            )
        );
    }

    #[test]
    fn test_tabs_html_escapes_label() {
        // 未知カテゴリはセルの文字列がそのままラベルになる
        let ordered = vec!["Fish <b>& Chips".to_string()];
        let html = tabs_html(&ordered, "Fish <b>& Chips", Language::Jp);
        assert!(!html.contains("<b>"));
        assert_eq!(
            html,
            r#"<div class="tab active" data-category="Fish &lt;b&gt;&amp; Chips">Fish &lt;b&gt;&amp; Chips</div>"#
        );
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text(r#"a"b<c>&'d"#), r#"a"b&lt;c&gt;&amp;'d"#);
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a"b<c>&'d"#), "a&quot;b&lt;c&gt;&amp;&#39;d");
    }

    #[test]
    fn test_header_html() {
        assert!(header_html(Language::Zh).contains("一之屋 菜单"));
        assert!(header_html(Language::En).contains("Ichinoya Menu"));
    }
}
