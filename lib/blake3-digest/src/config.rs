use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Read full blocks directly out of the input buffer when the host is little-endian and the
    /// block is word aligned. Never changes the digest.
    pub aligned_fast_path: bool,
    /// The maximum number of idle workspaces a [`HasherPool`](crate::HasherPool) keeps around.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aligned_fast_path: true,
            pool_size: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_uses_defaults() {
        let config: Config = toml::from_str("pool_size = 4").unwrap();
        assert_eq!(
            config,
            Config {
                aligned_fast_path: true,
                pool_size: 4,
            }
        );

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn toml_roundtrip() {
        let config = Config {
            aligned_fast_path: false,
            pool_size: 0,
        };
        let encoded = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&encoded).unwrap(), config);
    }
}
