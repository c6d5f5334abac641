// logging.rs

use std::sync::Once;

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::debug;

static LOGGER_INIT: Once = Once::new();

/// Starts the stderr logger once per process. `RUST_LOG` wins over `level`.
/// Failures go straight to stderr since there is no logger to report them.
pub fn init(level: &str) {
    LOGGER_INIT.call_once(|| match start(level) {
        Ok(handle) => {
            // lives for the rest of the process
            std::mem::forget(handle);
            debug!("logger initialized at {:?}", level);
        }
        Err(e) => eprintln!("could not start logger with {:?}: {}", level, e),
    });
}

fn start(level: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level)?.log_to_stderr().start()
}
