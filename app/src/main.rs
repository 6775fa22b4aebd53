mod app;
mod components;
mod state;
mod storage;

use tracing::Level;

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    dioxus::launch(app::App);
}
