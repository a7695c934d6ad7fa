use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Installs a test subscriber and color-eyre once per test binary.
pub fn setup_tracing_and_panic_handling() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,api=debug,common_services=debug,hyper=error,reqwest=error".into());

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .compact()
            .with_test_writer()
            .finish();

        // Another harness may already have installed one, that's fine.
        let _ = tracing::subscriber::set_global_default(subscriber);
        let _ = color_eyre::install();
    });
}
