// Native builds only compile the target-independent cores so `cargo test`
// can run off-browser; the binary itself is wasm-only.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod contact;
mod content;
mod cursor;
mod magnetic;
mod motion;
mod reveal;

#[cfg(target_arch = "wasm32")]
mod decor;
#[cfg(target_arch = "wasm32")]
mod driver;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod sections;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
