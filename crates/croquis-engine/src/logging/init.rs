use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` backend once; later calls are ignored.
///
/// Filter precedence: `RUST_LOG` if set, then `default_filter` if given
/// (same syntax, e.g. `"info"` or `"croquis_engine=debug,wgpu=warn"`), then
/// info level.
pub fn init_logging(default_filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else if let Some(filter) = default_filter {
            builder.parse_filters(filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
