//! Logging setup shared by the library and the demo application

/// Initialize logging with a default filter
///
/// `default_level` is an `env_logger` filter string such as `"info"` or
/// `"scene_placement=debug"`. `RUST_LOG` still takes precedence when set.
/// Calling this more than once is harmless.
pub fn init_with_level(default_level: &str) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp_millis()
    .try_init();
}
