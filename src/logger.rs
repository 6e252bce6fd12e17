#[cfg(feature = "ssr")]
pub fn init_server_logger() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_site=info,tower_http=info"));

    // also installs the log -> tracing bridge for records from shared components
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

#[cfg(feature = "hydrate")]
pub fn init_browser_logger() {
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}
