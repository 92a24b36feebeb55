/// Application configuration module
use crate::domain::DEFAULT_PAGE_SIZE;
use std::env;
use std::net::SocketAddr;
use std::num::NonZeroUsize;

pub const DEFAULT_SPACEX_API_URL: &str = "https://api.spacexdata.com/v4";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub spacex_api_url: String,
    pub bind_addr: SocketAddr,
    pub default_page_size: NonZeroUsize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let spacex_api_url =
            env::var("SPACEX_API_URL").unwrap_or_else(|_| DEFAULT_SPACEX_API_URL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let default_page_size = NonZeroUsize::new(env_usize("DEFAULT_PAGE_SIZE", 0))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Ok(Self {
            spacex_api_url,
            bind_addr,
            default_page_size,
        })
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_usize_fallback() {
        assert_eq!(env_usize("LAUNCH_BOARD_TEST_UNSET_KEY", 7), 7);
    }

    #[test]
    fn test_env_usize_parses() {
        env::set_var("LAUNCH_BOARD_TEST_PAGE_SIZE", " 25 ");
        assert_eq!(env_usize("LAUNCH_BOARD_TEST_PAGE_SIZE", 5), 25);

        env::set_var("LAUNCH_BOARD_TEST_PAGE_SIZE", "many");
        assert_eq!(env_usize("LAUNCH_BOARD_TEST_PAGE_SIZE", 5), 5);
    }
}
