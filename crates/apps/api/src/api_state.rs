use app_state::{AlbumSettings, AppSettings, DropboxSettings};
use axum::extract::FromRef;
use common_services::dropbox_client::DropboxClient;
use reqwest::Client;

/// Read-only state shared by all handlers, built once at startup.
#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub http_client: Client,
    pub dropbox_client: DropboxClient,
}

impl ApiContext {
    #[must_use]
    pub fn new(settings: AppSettings) -> Self {
        Self::with_http_client(settings, Client::new())
    }

    /// Builds the context around a caller-supplied client for all outbound fetches.
    #[must_use]
    pub fn with_http_client(settings: AppSettings, http_client: Client) -> Self {
        let dropbox_client =
            DropboxClient::new(http_client.clone(), &settings.dropbox, &settings.secrets);
        Self {
            settings,
            http_client,
            dropbox_client,
        }
    }
}

// These impls allow Axum to extract the parts a handler needs from the ApiContext.
impl FromRef<ApiContext> for Client {
    fn from_ref(state: &ApiContext) -> Self {
        state.http_client.clone()
    }
}

impl FromRef<ApiContext> for DropboxClient {
    fn from_ref(state: &ApiContext) -> Self {
        state.dropbox_client.clone()
    }
}

impl FromRef<ApiContext> for AlbumSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.albums.clone()
    }
}

impl FromRef<ApiContext> for DropboxSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.dropbox.clone()
    }
}
