mod browser;
mod config;

use shared::CounterLoader;
use crate::{
    browser::{BrowserFetch, ConsoleDiagnostics, DocumentPage},
    config::CONFIG,
};

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        CounterLoader::new(BrowserFetch, DocumentPage::current())
            .with_config_url(CONFIG.config_path)
            .with_element_id(CONFIG.count_element_id)
            .load(&ConsoleDiagnostics)
            .await;
    });
}
