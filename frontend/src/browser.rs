use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Document, RequestCache};
use shared::{
    CacheMode, CounterError, Diagnostics, Fetch, FetchRequest, HttpResponse, LoadOutcome, Page,
    Result, UNAVAILABLE_PREFIX,
};

pub struct BrowserFetch;

impl Fetch for BrowserFetch {
    async fn fetch(&self, request: FetchRequest) -> Result<HttpResponse> {
        let cache = match request.cache {
            CacheMode::Default => RequestCache::Default,
            CacheMode::NoStore => RequestCache::NoStore,
        };

        let response = Request::get(&request.url)
            .cache(cache)
            .send()
            .await
            .map_err(|e| CounterError::network(request.url.as_str(), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CounterError::network(request.url.as_str(), e))?;

        Ok(HttpResponse { status, body })
    }
}

pub struct DocumentPage {
    document: Option<Document>,
}

impl DocumentPage {
    pub fn current() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }
}

impl Page for DocumentPage {
    fn set_text(&self, id: &str, text: &str) -> bool {
        match self.document.as_ref().and_then(|doc| doc.get_element_by_id(id)) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }
}

pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn warn(&self, error: &CounterError) {
        web_sys::console::warn_2(
            &JsValue::from_str(UNAVAILABLE_PREFIX),
            &JsValue::from_str(&error.to_string()),
        );
    }

    fn loaded(&self, outcome: &LoadOutcome) {
        web_sys::console::debug_1(&format!("visitor counter: {:?}", outcome).into());
    }
}
