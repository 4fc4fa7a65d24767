use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initializes a tracing subscriber that logs to stderr, filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set.
pub fn subscriber() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        debug!("global tracing subscriber already set");
    }
}

/// Enables colored output only on terminals that support it and unless `NO_COLOR` is set.
pub fn enable_paint() {
    let enable = yansi::Condition::os_support() && yansi::Condition::tty_and_color_live();
    yansi::whenever(yansi::Condition::cached(enable));
}
