//! Portfolio site - Yew WASM frontend.
//!
//! This crate renders the single-page personal portfolio: hero,
//! About, Selected Work (the project feed), Skills, and Contact.

mod app;
mod components;
mod config;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
