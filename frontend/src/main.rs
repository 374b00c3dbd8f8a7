//! Frontend application entry point.

use dioxus::logger::tracing::{self, Level};
use frontend::app::App;

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger already initialized: {e}");
    }
    tracing::info!("starting group search panel");
    dioxus::launch(App);
}
