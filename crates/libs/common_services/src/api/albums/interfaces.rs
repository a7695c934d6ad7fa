use serde::{Deserialize, Serialize};

/// The remote JSON document listing all albums, in display order.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumManifest {
    #[serde(default)]
    pub title: Option<String>,
    pub albums: Vec<Album>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Storage path of the cover image, proxied through the thumbnail route.
    #[serde(default)]
    pub cover_path: Option<String>,
}

/// Everything the album page needs, derived from an [`AlbumManifest`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AlbumsPage {
    pub title: Option<String>,
    pub albums: Vec<AlbumView>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AlbumView {
    pub url: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub icon: Option<AlbumIcon>,
}

/// Branding for the site hosting an album.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AlbumIcon {
    pub src: &'static str,
    pub alt: &'static str,
    pub height: &'static str,
}

pub const DROPBOX_ICON: AlbumIcon = AlbumIcon {
    src: "/images/dropbox-icon.png",
    alt: "Dropbox",
    height: "40px",
};

pub const GOOGLE_PLUS_ICON: AlbumIcon = AlbumIcon {
    src: "/images/gplus-icon.svg",
    alt: "Google+",
    height: "32px",
};
