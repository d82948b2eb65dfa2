use clap::{Parser, Subcommand};
use menu_board_common::Language;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menu-board")]
#[command(about = "多言語メニュー表示ツール（CSVフィード → タブ付きメニューページ）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// メニューページ（HTML）を生成
    Render {
        /// フィード（URLまたはCSVファイル、省略時は設定値）
        #[arg(short, long)]
        feed: Option<String>,

        /// 表示言語 (jp/en/zh)
        #[arg(short, long)]
        lang: Option<Language>,

        /// 最初に表示するカテゴリ（省略時は先頭）
        #[arg(short, long)]
        category: Option<String>,

        /// 出力HTMLファイル
        #[arg(short, long, default_value = "menu.html")]
        output: PathBuf,
    },

    /// カテゴリ一覧を表示順に出力
    Categories {
        /// フィード（URLまたはCSVファイル、省略時は設定値）
        #[arg(short, long)]
        feed: Option<String>,

        /// 表示言語 (jp/en/zh)
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// メニュー項目をJSONで出力
    Items {
        /// フィード（URLまたはCSVファイル、省略時は設定値）
        #[arg(short, long)]
        feed: Option<String>,

        /// 非表示の行も含める
        #[arg(long)]
        all: bool,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// フィードURLを設定
        #[arg(long)]
        set_feed_url: Option<String>,

        /// 既定の表示言語を設定
        #[arg(long)]
        set_lang: Option<Language>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
