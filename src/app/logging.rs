use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable switching the default level to `debug`
pub const DEBUG_ENV: &str = "FANMAP_DEBUG";

/// Install the global `tracing` subscriber, writing to stderr
///
/// `RUST_LOG` overrides the default level, which is `info` (or `debug`
/// when `FANMAP_DEBUG=true`). Calling this more than once is harmless.
pub fn init_logging() {
    let debug_mode = debug_enabled(std::env::var(DEBUG_ENV).ok().as_deref());
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug_mode, &directives))
        .with_writer(std::io::stderr)
        .try_init();
}

fn debug_enabled(flag: Option<&str>) -> bool {
    flag.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn build_filter(debug_mode: bool, directives: &str) -> EnvFilter {
    let default_level = if debug_mode { Level::DEBUG } else { Level::INFO };
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(directives)
}
