use std::env;

/// Environment variable that turns on diagnostic output
pub const DEBUG_VAR: &str = "PAWK_DEBUG";
/// Environment variable naming the engine binary
pub const ENGINE_VAR: &str = "PAWK_AWK";
/// Engine used when `PAWK_AWK` is unset
pub const DEFAULT_ENGINE: &str = "awk";

/// Run-time settings for one invocation.
///
/// Read once from the environment in `main` and passed down explicitly, so
/// library code never consults the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Write tokens and the generated program to stderr before running
    pub debug: bool,
    /// Engine binary to launch
    pub engine: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug = lookup(DEBUG_VAR)
            .map(|v| !v.is_empty() && v != "0")
            .unwrap_or(false);
        let engine = lookup(ENGINE_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENGINE.to_string());

        Self { debug, engine }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            engine: DEFAULT_ENGINE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert!(!config.debug);
        assert_eq!(config.engine, "awk");
    }

    #[test]
    fn test_debug_flag() {
        assert!(config_from(&[("PAWK_DEBUG", "1")]).debug);
        assert!(config_from(&[("PAWK_DEBUG", "yes")]).debug);
        assert!(!config_from(&[("PAWK_DEBUG", "0")]).debug);
        assert!(!config_from(&[("PAWK_DEBUG", "")]).debug);
    }

    #[test]
    fn test_engine_override() {
        assert_eq!(config_from(&[("PAWK_AWK", "gawk")]).engine, "gawk");
        assert_eq!(config_from(&[("PAWK_AWK", "")]).engine, "awk");
    }
}
