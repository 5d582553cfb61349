//! Client-side runtime for the portfolio page: the particle field background
//! (a bevy app rendering into a canvas behind the content) and the small page
//! behaviours around it.

pub mod engine;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod dom;
