use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub calculator: CalculatorConfig,
    pub string_concepts: StringConceptsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalculatorConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StringConceptsConfig {
    pub port: u16,
    pub sample_name: String,
}

impl Config {
    pub fn calculator_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.calculator.port)
    }

    pub fn string_concepts_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.string_concepts.port)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"

[calculator]
port = 5000

[string_concepts]
port = 5001
sample_name = "Sadaf"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.calculator.port == config.string_concepts.port {
        anyhow::bail!(
            "calculator and string_concepts must listen on different ports (both {})",
            config.calculator.port
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.calculator_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.string_concepts_addr().to_string(), "0.0.0.0:5001");
        assert_eq!(config.string_concepts.sample_name, "Sadaf");
    }

    #[test]
    fn test_same_port_is_rejected() {
        let contents = r#"
            [server]
            host = "127.0.0.1"
            [calculator]
            port = 8080
            [string_concepts]
            port = 8080
            sample_name = "x"
        "#;
        assert!(parse_config(contents).is_err());
    }

    #[test]
    fn test_missing_section_is_rejected() {
        assert!(parse_config("[server]\nhost = \"127.0.0.1\"\n").is_err());
    }
}
