//! Diagnostics for the session: load and save outcomes, fallbacks.
//!
//! Written to stderr so stdout only carries the conversation with the user.
//! Filtered through `RUST_LOG`, `warn` when unset.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .compact(),
    )
    .init();
}
