use crate::domain::{PetPayload, RequestMetadata};
use crate::session::Session;
use reqwest::{Response, Url};

pub const AUTHENTICATE_PATH: &str = "/key";
pub const CREATE_PET_PATH: &str = "/create_pet_simple";
pub const PETS_PATH: &str = "/pets";

/// Client for the pet registry, borrowing a [`Session`] it cannot outlive.
///
/// Responses are handed back untouched: a 4xx or 5xx is an observation for
/// the caller to assert on, not an error. Only transport faults are `Err`.
#[derive(Clone, Copy, Debug)]
pub struct RegistryClient<'s> {
    session: &'s Session,
}

impl<'s> RegistryClient<'s> {
    pub fn new(session: &'s Session) -> Self {
        Self { session }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.session.base_url(), path)
    }

    /// `/pets/{pet_id}`, with the id escaped into a single path segment.
    /// A base URL that cannot take path segments is passed through untouched
    /// for reqwest to reject.
    fn pet_url(&self, pet_id: &str) -> String {
        let collection = self.url(PETS_PATH);
        let Ok(mut url) = Url::parse(&collection) else {
            return collection;
        };
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.push(pet_id);
            }
            Err(()) => return collection,
        }
        url.into()
    }

    #[tracing::instrument(
        name = "Requesting auth key",
        skip_all,
        fields(headers = ?auth_data.names().collect::<Vec<_>>())
    )]
    pub async fn authenticate(
        &self,
        auth_data: &RequestMetadata,
    ) -> Result<Response, reqwest::Error> {
        let builder = self.session.http_client().get(self.url(AUTHENTICATE_PATH));
        auth_data.apply(builder).send().await
    }

    /// `payload: None` sends the request without any body.
    #[tracing::instrument(name = "Creating pet", skip(self, auth_key))]
    pub async fn create_pet(
        &self,
        auth_key: &RequestMetadata,
        payload: Option<&PetPayload>,
    ) -> Result<Response, reqwest::Error> {
        let mut builder = self.session.http_client().post(self.url(CREATE_PET_PATH));
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }
        auth_key.apply(builder).send().await
    }

    #[tracing::instrument(name = "Listing pets", skip(self, auth_key))]
    pub async fn list_pets(
        &self,
        auth_key: &RequestMetadata,
        filter: Option<&str>,
    ) -> Result<Response, reqwest::Error> {
        let mut builder = self.session.http_client().get(self.url(PETS_PATH));
        if let Some(filter) = filter {
            builder = builder.query(&[("filter", filter)]);
        }
        auth_key.apply(builder).send().await
    }

    #[tracing::instrument(name = "Updating pet", skip(self, auth_key))]
    pub async fn update_pet(
        &self,
        auth_key: &RequestMetadata,
        pet_id: &str,
        changes: &PetPayload,
    ) -> Result<Response, reqwest::Error> {
        let builder = self
            .session
            .http_client()
            .put(self.pet_url(pet_id))
            .json(changes);
        auth_key.apply(builder).send().await
    }

    #[tracing::instrument(name = "Deleting pet", skip(self, auth_key))]
    pub async fn delete_pet(
        &self,
        auth_key: &RequestMetadata,
        pet_id: &str,
    ) -> Result<Response, reqwest::Error> {
        let builder = self
            .session
            .http_client()
            .delete(self.pet_url(pet_id));
        auth_key.apply(builder).send().await
    }
}
