pub mod assets;
pub mod content;
pub mod explain;
pub mod motion;
pub mod state;
pub mod theme;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
