use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_POPULATION: usize = 50;
pub const DEFAULT_EMAIL_DOMAIN: &str = "halmstad.se";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub population_size: usize,
    pub email_domain: String,
    pub directory_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: vec!["*".to_string()],
            population_size: DEFAULT_POPULATION,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            directory_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults on
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_or(&lookup, "HOST", defaults.host);
        let port = parse_or(&lookup, "PORT", defaults.port);
        let population_size = parse_or(&lookup, "USER_POPULATION", defaults.population_size);

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => {
                let origins = parse_origins(&raw);
                if origins.is_empty() {
                    warn!("CORS_ORIGINS is empty, allowing any origin");
                    defaults.cors_origins
                } else {
                    origins
                }
            }
            None => defaults.cors_origins,
        };

        let email_domain = lookup("USER_EMAIL_DOMAIN")
            .map(|d| d.trim().trim_start_matches('@').to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or(defaults.email_domain);

        let directory_seed = lookup("DIRECTORY_SEED").and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| warn!("DIRECTORY_SEED '{}' is not a u64, using entropy", raw))
                .ok()
        });

        Self {
            host,
            port,
            cors_origins,
            population_size,
            email_domain,
            directory_seed,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} '{}' is invalid, using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
