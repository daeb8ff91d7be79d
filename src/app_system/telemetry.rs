/// Configure tracing once at application startup for the entire process.
///
/// Verbosity comes from `RUST_LOG`, falling back to info for this crate and
/// the HTTP trace layer:
///
/// ```bash
/// RUST_LOG=debug coffeemesh orders
/// RUST_LOG=coffeemesh::actor_framework=debug,tower_http=warn coffeemesh kitchen
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coffeemesh=info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
