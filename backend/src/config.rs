pub const DEFAULT_SITE_ID: &str = "default";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Counter partition this deployment increments.
    pub site_id: String,
    /// Origins allowed to call the API. Empty means local development only.
    pub allowed_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            site_id: DEFAULT_SITE_ID.to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Reads `SITE_ID` and `ALLOWED_ORIGINS` (comma separated) through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let site_id = lookup("SITE_ID")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_ID.to_string());

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self { site_id, allowed_origins }
    }
}
