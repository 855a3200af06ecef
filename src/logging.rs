use tracing_subscriber::{filter::LevelFilter, EnvFilter};

pub const LOG_ENV_VAR: &str = "CALIBRATION_LOG";

/// Installs a stderr subscriber filtered by `CALIBRATION_LOG`, defaulting to `warn`.
///
/// Errors are always reported, even when the variable turns logging off.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if filter
        .max_level_hint()
        .map_or(true, |level| level < LevelFilter::ERROR)
    {
        filter.add_directive(LevelFilter::ERROR.into())
    } else {
        filter
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
