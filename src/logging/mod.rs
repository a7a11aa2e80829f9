use log::Level;

const TARGET: &str = "profile_fetcher";

/// Sink for diagnostics produced by the fetcher.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

/// Forwards every message to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: TARGET, level, "{}", message);
    }
}

/// Installs `env_logger` with `info` as the default filter. `RUST_LOG` overrides it.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).try_init().ok();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
        ConsoleLogger.log(Level::Info, "logger ready");
    }
}
