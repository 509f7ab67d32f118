use std::env;
use std::sync::Once;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// The level is read from the `LOGLEVEL` environment variable (DEBUG, INFO,
/// WARN, ERROR; default INFO). Safe to call more than once; only the first
/// call installs a subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = match env::var("LOGLEVEL")
            .unwrap_or_else(|_| String::from("INFO"))
            .to_uppercase()
            .as_str()
        {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "WARN" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        };

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            info!("Logger initialized with level {}", level);
        }
    });
}
