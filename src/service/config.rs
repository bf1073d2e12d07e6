use std::time::Duration;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    /// Artificial wait before every answer.
    pub latency: Duration,
    /// `None` waits as long as the lookup takes.
    pub timeout: Option<Duration>,
}

impl Config {
    /// No artificial latency.
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}
