use anyhow::Context;
use clap::Parser;
use menu_board::{cli, config, error, feed, page};
use menu_board_common::{loader, Command, LoadOutcome, MemorySink, MenuItem, MenuSession};
use cli::{Cli, Commands};
use config::Config;
use error::MenuBoardError;
use feed::FeedSource;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Render { feed, lang, category, output } => {
            println!("🍱 menu-board - メニュー生成\n");

            let lang = lang.unwrap_or(config.default_lang);
            let source = FeedSource::parse(&feed.unwrap_or_else(|| config.feed_url()));

            println!("[1/3] フィードを取得中... ({})", source);
            let table = feed::load_feed(&source).await;

            println!("[2/3] メニューを描画中... (言語: {})", lang);
            let mut session = MenuSession::new(lang);
            let mut sink = MemorySink::new();
            let outcome = match &table {
                Ok(table) => session.load_table(table, &mut sink),
                Err(e) => session.fail(&e.to_string(), &mut sink),
            };

            if let (Some(key), LoadOutcome::Ready { .. }) = (&category, &outcome) {
                if !session.categories().contains(key) {
                    return Err(MenuBoardError::UnknownCategory(key.clone()).into());
                }
                session.dispatch(Command::SelectCategory(key.clone()), &mut sink);
            }

            match &outcome {
                LoadOutcome::Ready { .. } => {
                    let current = session.current_category().unwrap_or_default();
                    println!(
                        "✔ {}カテゴリ / {}件（表示中: {}）\n",
                        session.categories().len(),
                        session.items().len(),
                        current
                    );
                }
                LoadOutcome::Empty => println!("- 表示できる項目がありません\n"),
                LoadOutcome::Stub => println!("- 中国語メニューは準備中のため案内のみ出力します\n"),
                LoadOutcome::Failed(reason) => println!("- 読み込み失敗: {}\n", reason),
            }

            println!("[3/3] ページを保存中...");
            let title = config.page_title.as_deref().unwrap_or(lang.header_title().0);
            let html = page::render_page(&sink, lang, title);
            std::fs::write(&output, html)
                .with_context(|| format!("書き込みに失敗しました: {}", output.display()))?;
            println!("✔ ページを保存: {}", output.display());

            // ページは失敗表示のまま保存し、元のエラーで終了する
            table?;

            println!("\n✅ 完了");
        }

        Commands::Categories { feed, lang } => {
            let lang = lang.unwrap_or(config.default_lang);
            let source = FeedSource::parse(&feed.unwrap_or_else(|| config.feed_url()));
            let table = feed::load_feed(&source).await?;

            let mut session = MenuSession::new(lang);
            let mut sink = MemorySink::new();
            match session.load_table(&table, &mut sink) {
                LoadOutcome::Stub => println!("中国語メニューは準備中です"),
                _ => {
                    let categories = session.categories();
                    if categories.is_empty() {
                        println!("{}", lang.empty_message());
                    }
                    for key in categories {
                        let count = session.items().iter().filter(|i| i.category == key).count();
                        let label = menu_board_common::catalog::label(&key, lang);
                        println!("{}\t{}\t{}", key, label, count);
                    }
                }
            }
        }

        Commands::Items { feed, all, output } => {
            let source = FeedSource::parse(&feed.unwrap_or_else(|| config.feed_url()));
            let table = feed::load_feed(&source).await?;

            let items: Vec<MenuItem> = if all {
                table.rows().iter().map(MenuItem::from_row).collect()
            } else {
                loader::visible_items(&table)
            };

            let json = serde_json::to_string_pretty(&items)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ {}件を保存: {}", items.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { set_feed_url, set_lang, show } => {
            let mut config = config;

            if let Some(url) = set_feed_url {
                config.set_feed_url(url)?;
                println!("✔ フィードURLを設定しました");
            }

            if let Some(lang) = set_lang {
                config.default_lang = lang;
                config.save()?;
                println!("✔ 既定の言語を設定しました: {}", lang);
            }

            if show {
                println!("設定:");
                println!("  フィード: {}", config.feed_url());
                println!("  既定の言語: {}", config.default_lang);
                println!("  ページタイトル: {}", config.page_title.as_deref().unwrap_or("（言語別の店名）"));
            }
        }
    }

    Ok(())
}
