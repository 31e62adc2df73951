//! Server configuration from environment.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

/// Process-level configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// OSRM server base URL
    pub osrm_base_url: String,
    /// Nominatim server base URL
    pub nominatim_base_url: String,
    /// Path to the jurisdiction → mph JSON table
    pub speed_limits_path: String,
    /// Speed for jurisdictions missing from the table (including lookups
    /// that failed)
    pub default_speed_mph: f64,
    /// Time allowed for each jurisdiction lookup
    pub lookup_timeout: Duration,
    /// `User-Agent` sent to external services
    pub user_agent: String,
    /// Directory served under `/static`
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            osrm_base_url: "http://router.project-osrm.org".to_string(),
            nominatim_base_url: "https://nominatim.openstreetmap.org".to_string(),
            speed_limits_path: "data/speed_limits.json".to_string(),
            default_speed_mph: 60.0,
            lookup_timeout: Duration::from_secs(10),
            user_agent: concat!("stop-planner/", env!("CARGO_PKG_VERSION")).to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars().collect())
    }

    /// Build configuration from a variable map. Unset or unparseable
    /// values fall back to the defaults.
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| vars.get(key).filter(|v| !v.trim().is_empty()).cloned();

        Self {
            bind_addr: get("STOP_PLANNER_ADDR")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.bind_addr),
            osrm_base_url: get("OSRM_BASE_URL").unwrap_or(defaults.osrm_base_url),
            nominatim_base_url: get("NOMINATIM_BASE_URL").unwrap_or(defaults.nominatim_base_url),
            speed_limits_path: get("SPEED_LIMITS_PATH").unwrap_or(defaults.speed_limits_path),
            default_speed_mph: get("DEFAULT_SPEED_MPH")
                .and_then(|s| s.parse().ok())
                .filter(|mph: &f64| mph.is_finite() && *mph > 0.0)
                .unwrap_or(defaults.default_speed_mph),
            lookup_timeout: get("LOOKUP_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.lookup_timeout),
            user_agent: get("HTTP_USER_AGENT").unwrap_or(defaults.user_agent),
            static_dir: get("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }
}
