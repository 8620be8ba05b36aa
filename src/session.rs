use crate::configuration::ApiSettings;
use reqwest::Client;

/// A network session owned by exactly one scenario.
///
/// Idle connections are never kept, so once the session is dropped nothing
/// it opened survives into the next scenario.
#[derive(Debug)]
pub struct Session {
    base_url: String,
    http_client: Client,
}

impl Session {
    #[tracing::instrument(name = "Opening session", skip_all, fields(base_url = %settings.base_url))]
    pub fn open(settings: &ApiSettings) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(settings.timeout())
            .pool_max_idle_per_host(0)
            .build()?;
        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.http_client
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        tracing::debug!(base_url = %self.base_url, "Closing session");
    }
}
