use crate::{env_or_default, env_parse_or, ConfigError, FromEnv};

/// Cross-origin policy for browser clients.
///
/// In strict mode (the default) a request carrying an `Origin` header is only
/// served when the origin appears in `allowed_origins`. Permissive mode turns
/// the check off entirely and is meant for local development.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub permissive: bool,
}

impl CorsConfig {
    /// Strict policy with a single allowed origin.
    pub fn single(origin: impl Into<String>) -> Self {
        Self {
            allowed_origins: vec![origin.into()],
            permissive: false,
        }
    }

    /// Policy that accepts every origin.
    pub fn permissive() -> Self {
        Self {
            allowed_origins: Vec::new(),
            permissive: true,
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.permissive || self.allowed_origins.iter().any(|o| o == origin)
    }
}

impl FromEnv for CorsConfig {
    /// Reads:
    /// - CORS_PERMISSIVE: `true` disables the origin check (default `false`)
    /// - CORS_ALLOWED_ORIGIN: comma-separated origins, required in strict mode
    fn from_env() -> Result<Self, ConfigError> {
        let permissive: bool = env_parse_or("CORS_PERMISSIVE", "false")?;

        let allowed_origins: Vec<String> = env_or_default("CORS_ALLOWED_ORIGIN", "")
            .split(',')
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if !permissive && allowed_origins.is_empty() {
            return Err(ConfigError::MissingEnvVar("CORS_ALLOWED_ORIGIN".to_string()));
        }

        Ok(Self {
            allowed_origins,
            permissive,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_config_single_origin() {
        temp_env::with_vars(
            [
                ("CORS_ALLOWED_ORIGIN", Some("http://localhost:5173")),
                ("CORS_PERMISSIVE", None),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(config, CorsConfig::single("http://localhost:5173"));
                assert!(config.is_allowed("http://localhost:5173"));
                assert!(!config.is_allowed("http://evil.example"));
            },
        );
    }

    #[test]
    fn test_cors_config_list_is_trimmed() {
        temp_env::with_vars(
            [
                (
                    "CORS_ALLOWED_ORIGIN",
                    Some(" http://a.example/ , ,https://b.example"),
                ),
                ("CORS_PERMISSIVE", None),
            ],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert_eq!(
                    config.allowed_origins,
                    vec!["http://a.example", "https://b.example"]
                );
            },
        );
    }

    #[test]
    fn test_cors_config_requires_origin_in_strict_mode() {
        temp_env::with_vars(
            [("CORS_ALLOWED_ORIGIN", None::<&str>), ("CORS_PERMISSIVE", None)],
            || {
                let err = CorsConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
            },
        );
    }

    #[test]
    fn test_cors_config_permissive_without_origins() {
        temp_env::with_vars(
            [("CORS_ALLOWED_ORIGIN", None::<&str>), ("CORS_PERMISSIVE", Some("true"))],
            || {
                let config = CorsConfig::from_env().unwrap();
                assert!(config.permissive);
                assert!(config.is_allowed("http://anything.example"));
            },
        );
    }

    #[test]
    fn test_cors_config_invalid_flag() {
        temp_env::with_var("CORS_PERMISSIVE", Some("maybe"), || {
            let err = CorsConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_PERMISSIVE"));
        });
    }
}
