use crate::{AppSettings, RawSettings};
use color_eyre::eyre::{Context, Result};
use std::path::Path;

pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv to get it to overwrite the access token from env.
    dotenv::from_path(".env").ok();
    load_settings_from_path(Path::new("config/settings.yaml"), true)
}

/// Loads settings from a yaml file, optionally layering `APP__`-prefixed environment variables on top.
pub fn load_settings_from_path(path: &Path, use_env: bool) -> Result<AppSettings> {
    let config_path = path
        .canonicalize()
        .wrap_err_with(|| format!("Cannot find settings file {}", path.display()))?;

    let mut builder = config::Config::builder().add_source(config::File::from(config_path));
    if use_env {
        builder = builder.add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );
    }

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}
