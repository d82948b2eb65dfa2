//! カテゴリ辞書
//!
//! 表示順と言語別ラベルの固定テーブル。
//! 辞書にないカテゴリはそのままの名前で表示し、既知カテゴリの後ろに並べる。

use crate::language::Language;

/// (カテゴリキー, 英語ラベル) を表示順に並べたもの
const ORDERED: &[(&str, &str)] = &[
    ("季節のお料理", "Seasonal Dishes"),
    ("うなぎ料理", "Unagi Dishes"),
    ("コース料理", "Course Meals"),
    ("お料理", "Dishes"),
    ("サラダ", "Salads"),
    ("ビール", "Beer"),
    ("日本酒", "Sake"),
    ("焼酎", "Shochu"),
    ("ウイスキー", "Whisky"),
    ("サワー類", "Sours"),
    ("ジャパニーズジン", "Japanese Gin"),
    ("ソフトドリンク", "Soft Drinks"),
    ("デザート", "Dessert"),
];

/// 翻訳はあるが表示順には含まれないカテゴリ
const UNORDERED: &[(&str, &str)] = &[("その他", "Others")];

/// カテゴリの表示順位（辞書にない場合は None）
pub fn position(key: &str) -> Option<usize> {
    ORDERED.iter().position(|(k, _)| *k == key)
}

/// カテゴリの表示ラベル
///
/// 中国語は翻訳未整備のためキーをそのまま返す。
pub fn label<'a>(key: &'a str, lang: Language) -> &'a str {
    match lang {
        Language::En => ORDERED
            .iter()
            .chain(UNORDERED)
            .find(|(k, _)| *k == key)
            .map(|(_, en)| *en)
            .unwrap_or(key),
        Language::Jp | Language::Zh => key,
    }
}

/// 既知カテゴリを辞書順に、未知カテゴリを出現順に並べる
pub fn order_categories<S: AsRef<str>>(categories: &[S]) -> Vec<String> {
    let present = |key: &str| categories.iter().any(|c| c.as_ref() == key);

    let known = ORDERED
        .iter()
        .map(|(k, _)| *k)
        .filter(|k| present(*k))
        .map(str::to_string);

    let unknown = categories
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| position(c).is_none())
        .map(str::to_string);

    let mut ordered: Vec<String> = Vec::with_capacity(categories.len());
    for key in known.chain(unknown) {
        if !ordered.contains(&key) {
            ordered.push(key);
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        assert_eq!(position("季節のお料理"), Some(0));
        assert_eq!(position("デザート"), Some(12));
        assert_eq!(position("その他"), None);
        assert_eq!(position("限定"), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(label("ビール", Language::En), "Beer");
        assert_eq!(label("その他", Language::En), "Others");
        assert_eq!(label("ビール", Language::Jp), "ビール");
        assert_eq!(label("ビール", Language::Zh), "ビール");
        assert_eq!(label("限定メニュー", Language::En), "限定メニュー");
    }

    #[test]
    fn test_order_known_then_unknown() {
        let found = ["限定", "ビール", "その他", "うなぎ料理", "限定"];
        assert_eq!(
            order_categories(&found),
            vec!["うなぎ料理", "ビール", "限定", "その他"]
        );
    }

    #[test]
    fn test_order_independent_of_input_order_for_known() {
        let a = order_categories(&["デザート", "日本酒", "サラダ"]);
        let b = order_categories(&["サラダ", "デザート", "日本酒"]);
        assert_eq!(a, b);
        assert_eq!(a, vec!["サラダ", "日本酒", "デザート"]);
    }

    #[test]
    fn test_order_empty() {
        let none: [&str; 0] = [];
        assert!(order_categories(&none).is_empty());
    }
}
