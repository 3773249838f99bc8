use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("CLINIC_HOST").unwrap_or_else(|_| {
                warn!("CLINIC_HOST not set, using 0.0.0.0");
                "0.0.0.0".to_string()
            }),
            port: env::var("CLINIC_PORT")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("CLINIC_PORT is not a valid port number: {}", raw);
                        None
                    }
                })
                .unwrap_or(3000),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|raw| matches!(raw.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}
