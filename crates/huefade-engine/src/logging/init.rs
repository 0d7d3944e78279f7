use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "huefade_ui=debug", "huefade_ui::transition=trace").
///
/// `write_style` controls ANSI coloring behavior. Terminal renderers that own
/// stdout usually want `Never` so log lines on stderr stay plain.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
/// Subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        // Transitions are hundreds of milliseconds long; second resolution hides them.
        builder.format_timestamp_millis();
        builder.write_style(config.write_style);

        if let Err(err) = builder.try_init() {
            eprintln!("huefade: another logger is already installed ({err})");
            return;
        }

        log::debug!("logging initialized");
    });
}
