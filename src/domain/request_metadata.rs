use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, Secret};

/// Header values attached to a request, in insertion order.
///
/// Values are kept behind [`Secret`] since they carry passwords and auth keys.
#[derive(Clone, Debug, Default)]
pub struct RequestMetadata {
    entries: Vec<(&'static str, Secret<String>)>,
}

impl RequestMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing any previous value.
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = Secret::new(value.into());
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.entries.retain(|(n, _)| *n != name);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Secret<String>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn apply(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (name, value) in &self.entries {
            builder = builder.header(*name, value.expose_secret().as_str());
        }
        builder
    }
}
