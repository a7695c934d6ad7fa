use crate::runner::orchestration_utils::setup_tracing_and_panic_handling;
use crate::runner::stub_upstream::StubUpstream;
use api::api_state::ApiContext;
use app_state::{AppSettings, load_settings_from_path};
use color_eyre::Result;
use std::path::Path;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};
use url::Url;

/// A running API wired to a stub upstream, torn down on drop.
pub struct TestContext {
    pub settings: AppSettings,
    pub http_client: reqwest::Client,
    pub base_url: String,
    pub upstream: StubUpstream,
    api_handle: JoinHandle<()>,
    upstream_handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        Self::with_settings(|_| {}).await
    }

    /// Like [`TestContext::new`], but lets a test adjust the settings before the API starts.
    /// Upstream urls already point at the stub when `configure` runs.
    pub async fn with_settings(configure: impl FnOnce(&mut AppSettings)) -> Result<Self> {
        setup_tracing_and_panic_handling();
        info!("Setting up test environment...");

        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let mut settings = load_settings_from_path(&manifest_dir.join("assets/settings.yaml"), false)?;
        settings.api.static_dir = manifest_dir.join(&settings.api.static_dir);

        let (upstream, upstream_addr, upstream_handle) = StubUpstream::spawn().await?;
        let upstream_base = format!("http://{upstream_addr}");
        settings.albums.manifest_url = Url::parse(&format!("{upstream_base}/manifest/albums.json"))?;
        settings.dropbox.thumbnail_base_url = format!("{upstream_base}/thumbnails/auto/");

        configure(&mut settings);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let api_addr = listener.local_addr()?;
        settings.api.port = u32::from(api_addr.port());
        settings.api.public_url = format!("http://{api_addr}");

        // Outbound calls only ever go to the local stub, keep any system proxy out of the way.
        let outbound_client = reqwest::Client::builder().no_proxy().build()?;
        let api_state = ApiContext::with_http_client(settings.clone(), outbound_client);
        let api_handle = tokio::spawn(async move {
            if let Err(e) = api::serve_context(listener, api_state).await {
                error!("API server failed: {}", e);
            }
        });

        let http_client = reqwest::Client::builder()
            .no_proxy()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url: settings.api.public_url.clone(),
            settings,
            http_client,
            upstream,
            api_handle,
            upstream_handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.api_handle.abort();
        self.upstream_handle.abort();
    }
}
