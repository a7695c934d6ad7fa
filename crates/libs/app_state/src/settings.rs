use crate::{ApiSettings, LoggingSettings, RawSettings, SecretSettings};
use color_eyre::eyre::{Context, Report};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub albums: AlbumSettings,
    pub dropbox: DropboxSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlbumSettings {
    pub manifest_url: Url,
    pub thumbnails_enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DropboxSettings {
    /// Always ends with a `/`, so escaped storage paths can be appended directly.
    pub thumbnail_base_url: String,
    pub thumbnail_size: String,
    pub allowed_path_prefix: String,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = Report;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let manifest_url = Url::parse(&raw.albums.manifest_url)
            .wrap_err_with(|| format!("Invalid albums.manifest_url: {}", raw.albums.manifest_url))?;

        let mut thumbnail_base_url = raw.dropbox.thumbnail_base_url;
        Url::parse(&thumbnail_base_url)
            .wrap_err_with(|| format!("Invalid dropbox.thumbnail_base_url: {thumbnail_base_url}"))?;
        if !thumbnail_base_url.ends_with('/') {
            thumbnail_base_url.push('/');
        }

        Ok(Self {
            api: raw.api,
            albums: AlbumSettings {
                manifest_url,
                thumbnails_enabled: raw.albums.thumbnails_enabled,
            },
            dropbox: DropboxSettings {
                thumbnail_base_url,
                thumbnail_size: raw.dropbox.thumbnail_size,
                allowed_path_prefix: raw.dropbox.allowed_path_prefix,
            },
            logging: raw.logging,
            secrets: raw.secrets,
        })
    }
}
