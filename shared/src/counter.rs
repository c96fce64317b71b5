use crate::error::{CounterError, Result};
use crate::models::{CounterConfig, CountResponse};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_COUNT_ELEMENT_ID: &str = "count";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    /// Normal HTTP caching. The loader never asks for it; fetchers map it for other callers.
    Default,
    NoStore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub cache: CacheMode,
}

impl FetchRequest {
    pub fn no_store(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            cache: CacheMode::NoStore,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP GET. Transport failures come back as [`CounterError::Network`];
/// any response that arrives, whatever its status, is `Ok`.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, request: FetchRequest) -> Result<HttpResponse>;
}

/// The hosting page.
pub trait Page {
    /// Sets the text of the element with `id`. Returns `false` if there is no such element.
    fn set_text(&self, id: &str, text: &str) -> bool;
}

pub trait Diagnostics {
    fn warn(&self, error: &CounterError);

    fn loaded(&self, _outcome: &LoadOutcome) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Displayed(String),
    TargetMissing,
    CountUndefined,
}

pub struct CounterLoader<F, P> {
    fetcher: F,
    page: P,
    config_url: String,
    element_id: String,
}

impl<F: Fetch, P: Page> CounterLoader<F, P> {
    pub fn new(fetcher: F, page: P) -> Self {
        Self {
            fetcher,
            page,
            config_url: DEFAULT_CONFIG_PATH.to_string(),
            element_id: DEFAULT_COUNT_ELEMENT_ID.to_string(),
        }
    }

    pub fn with_config_url(mut self, url: impl Into<String>) -> Self {
        self.config_url = url.into();
        self
    }

    pub fn with_element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = id.into();
        self
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The config response status is not checked; only its body has to parse.
    pub async fn fetch_config(&self) -> Result<CounterConfig> {
        let response = self
            .fetcher
            .fetch(FetchRequest::no_store(self.config_url.as_str()))
            .await?;
        CounterConfig::from_body(&response.body)
    }

    pub async fn fetch_count(&self, config: &CounterConfig) -> Result<CountResponse> {
        let url = config.count_url();
        let response = self.fetcher.fetch(FetchRequest::no_store(url)).await?;
        if !response.is_success() {
            return Err(CounterError::BadStatus(response.status));
        }
        CountResponse::from_body(&response.body)
    }

    pub async fn try_load(&self) -> Result<LoadOutcome> {
        let config = self.fetch_config().await?;
        let count = self.fetch_count(&config).await?;

        let Some(text) = count.display_text() else {
            return Ok(LoadOutcome::CountUndefined);
        };

        if self.page.set_text(&self.element_id, &text) {
            Ok(LoadOutcome::Displayed(text))
        } else {
            Ok(LoadOutcome::TargetMissing)
        }
    }

    /// Runs the whole sequence. Nothing escapes: failures go to `diagnostics`
    /// and leave the page as it was.
    pub async fn load<D: Diagnostics>(&self, diagnostics: &D) -> Option<LoadOutcome> {
        match self.try_load().await {
            Ok(outcome) => {
                diagnostics.loaded(&outcome);
                Some(outcome)
            }
            Err(e) => {
                diagnostics.warn(&e);
                None
            }
        }
    }
}
