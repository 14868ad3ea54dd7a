use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub capture_rate: Duration,
    pub alarm_cooldown: Duration,
    pub alert_history_limit: usize,
    pub detect_endpoint: String,
    pub detect_timeout: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            capture_rate: Duration::from_millis(100),
            alarm_cooldown: Duration::from_millis(2500),
            alert_history_limit: 10,
            detect_endpoint: "http://localhost:5001/api/detect".to_string(),
            detect_timeout: Duration::from_secs(5),
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
