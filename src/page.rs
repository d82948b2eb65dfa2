//! 静的ページの出力
//!
//! 描画済みの3領域（ヘッダー・タブ・メニュー）をHTML文書に埋め込む。

use menu_board_common::render::escape_attr;
use menu_board_common::{Language, MemorySink, Region};

const STYLE: &str = r#"
body { font-family: "Hiragino Sans", "Noto Sans JP", sans-serif; margin: 0; background: #faf7f2; color: #2b2b2b; }
#header { text-align: center; padding: 16px; background: #3b2a1a; color: #fff; }
#header .en { font-size: 0.6em; letter-spacing: 0.1em; }
#tabs { display: flex; flex-wrap: wrap; gap: 6px; padding: 8px; }
.tab { padding: 6px 12px; border-radius: 16px; background: #eee3d3; }
.tab.active { background: #8b4513; color: #fff; }
.menu-item { display: flex; gap: 12px; padding: 12px; border-bottom: 1px solid #e5dccf; }
.menu-img img { width: 120px; border-radius: 6px; }
.cat { font-size: 0.8em; color: #8b4513; }
.jp-sub { font-size: 0.85em; color: #666; }
.takeout-badge { font-size: 0.75em; padding: 2px 6px; background: #2e7d32; color: #fff; border-radius: 4px; }
.price { font-weight: bold; }
.note { padding: 8px 12px; font-size: 0.85em; color: #555; }
.note.stub { text-align: center; padding: 40px; font-size: 1.1em; }
"#;

/// HTML文書全体を生成
pub fn render_page(sink: &MemorySink, lang: Language, title: &str) -> String {
    let region = |r: Region| {
        format!(
            r#"<div id="{}">{}</div>"#,
            r.element_id(),
            sink.get(r).unwrap_or_default()
        )
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"{lang}\">\n",
            "<head>\n<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n<style>{style}</style>\n</head>\n",
            "<body>\n{header}\n{tabs}\n{menu}\n</body>\n</html>\n",
        ),
        lang = lang.html_lang(),
        title = escape_attr(title),
        style = STYLE,
        header = region(Region::Header),
        tabs = region(Region::Tabs),
        menu = region(Region::Menu),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_board_common::RenderSink;

    #[test]
    fn test_render_page_regions() {
        let mut sink = MemorySink::new();
        sink.set_markup(Region::Header, "<h1>H</h1>");
        sink.set_markup(Region::Menu, "<p>M</p>");

        let html = render_page(&sink, Language::En, "Menu & Drinks");

        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Menu &amp; Drinks</title>"));
        assert!(html.contains(r#"<div id="header"><h1>H</h1></div>"#));
        assert!(html.contains(r#"<div id="tabs"></div>"#));
        assert!(html.contains(r#"<div id="menu"><p>M</p></div>"#));
    }
}
