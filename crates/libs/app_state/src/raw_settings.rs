use serde::Deserialize;
use std::path::PathBuf;

/// Settings exactly as they appear in `config/settings.yaml` (plus `APP__` env overrides).
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: ApiSettings,
    pub albums: RawAlbumSettings,
    pub dropbox: RawDropboxSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub public_url: String,
    /// Folder served under `/images`, holds the album provider icons.
    pub static_dir: PathBuf,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawAlbumSettings {
    pub manifest_url: String,
    /// Enables the `/albums/thumbnail` proxy and cover links on the album page.
    #[serde(default = "default_true")]
    pub thumbnails_enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawDropboxSettings {
    pub thumbnail_base_url: String,
    pub thumbnail_size: String,
    pub allowed_path_prefix: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Deserialize, Clone)]
pub struct SecretSettings {
    #[serde(default)]
    pub dropbox_access_token: String,
}

impl std::fmt::Debug for SecretSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSettings")
            .field("dropbox_access_token", &"<redacted>")
            .finish()
    }
}

const fn default_true() -> bool {
    true
}
