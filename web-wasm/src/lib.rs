//! Menu Board Web App (WASM)

pub mod app;
pub mod dom;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
