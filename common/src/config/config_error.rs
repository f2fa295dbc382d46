#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml_ng::Error),
    Serialize(serde_yaml_ng::Error),
    Validation(String),
    LockPoisoned,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config file IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to deserialize config: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Validation(e) => write!(f, "Config validation error: {}", e),
            ConfigError::LockPoisoned => write!(f, "Config cache lock poisoned"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) | ConfigError::Serialize(e) => Some(e),
            ConfigError::Validation(_) | ConfigError::LockPoisoned => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
