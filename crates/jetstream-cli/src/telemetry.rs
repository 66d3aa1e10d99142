//! Logging setup shared by the binaries.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` plus [`default_directives`].
///
/// Binaries pass `env!("CARGO_CRATE_NAME")` as `binary` so their own events are kept.
/// `JETSTREAM_LOG_JSON=1` switches to one JSON object per event.
pub fn init_tracing(binary: &str, level: Level) -> anyhow::Result<()> {
    let filter = default_directives(EnvFilter::from_default_env(), binary, level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if json_requested() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}

/// Enable `level` for the jetstream library crates and for the calling binary's target.
pub fn default_directives(filter: EnvFilter, binary: &str, level: Level) -> anyhow::Result<EnvFilter> {
    Ok(filter
        .add_directive(format!("jetstream={level}").parse()?)
        .add_directive(format!("{binary}={level}").parse()?))
}

fn json_requested() -> bool {
    std::env::var("JETSTREAM_LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}
