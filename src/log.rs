// src/log.rs
// Subscriber setup for the binary. The library only emits `tracing` events.
//
// Lines are stamped with time since start, like `[00:00:01.234]`, and go to
// stderr so stdout stays clean for status lines. Filter with RUST_LOG
// (default: info).

use tracing_subscriber::{EnvFilter, fmt, fmt::time::Uptime};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
