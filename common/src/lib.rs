//! Menu Board Common Library
//!
//! CLIとWeb(WASM)で共有されるメニュー表示パイプライン

pub mod error;
pub mod language;
pub mod field;
pub mod image;
pub mod price;
pub mod catalog;
pub mod item;
pub mod render;
pub mod navigator;
pub mod loader;

pub use error::{Error, Result};
pub use language::Language;
pub use field::{Field, HeaderMatcher, MenuRow, MenuTable};
pub use image::normalize_image_url;
pub use price::format_price;
pub use item::MenuItem;
pub use navigator::{compute_categories, Command, MemorySink, MenuSession, Region, RenderSink};
pub use loader::{LoadOutcome, DEFAULT_FEED_URL};
