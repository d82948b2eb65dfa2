use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuBoardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フィードファイルが見つかりません: {0}")]
    FeedNotFound(String),

    #[error("フィード取得エラー: {0}")]
    Fetch(String),

    #[error("カテゴリが見つかりません: {0}")]
    UnknownCategory(String),

    #[error("メニューの読み込みに失敗: {0}")]
    Load(#[from] menu_board_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MenuBoardError>;
