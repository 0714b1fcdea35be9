use crate::STALE_TIMEOUT;
use crate::SWEEP_INTERVAL;
use std::time::Duration;

/// Timing knobs for the session registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LobbyConfig {
    /// Age after which a session still waiting for a guest is evicted.
    pub stale: Duration,
    /// Period of the background sweep.
    pub sweep: Duration,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            stale: STALE_TIMEOUT,
            sweep: SWEEP_INTERVAL,
        }
    }
}

impl LobbyConfig {
    pub fn new(stale: Duration, sweep: Duration) -> Self {
        Self { stale, sweep }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config() {
        let config = LobbyConfig::default();
        assert_eq!(config.stale, Duration::from_secs(600));
        assert_eq!(config.sweep, Duration::from_secs(60));
    }
}
