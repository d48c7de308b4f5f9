//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ShadowConfig;
use crate::domain::errors::ShadowError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Prefix of the environment variables that override file values
const ENV_PREFIX: &str = "SHADOW";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ShadowConfig
/// 4. Applies environment variable overrides (SHADOW_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`ShadowError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, the TOML does not parse, an
/// override does not parse, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use shadowmodel::config::loader::load_config;
///
/// let config = load_config("shadowmodel.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ShadowConfig> {
    let config = read_config(path)?;

    config.validate().map_err(|e| {
        ShadowError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads configuration without validating it
///
/// Used by commands that apply command-line overrides (such as `--dry-run`)
/// before calling [`ShadowConfig::validate`] themselves.
///
/// # Errors
///
/// Same as [`load_config`] except for validation failures.
pub fn read_config(path: impl AsRef<Path>) -> Result<ShadowConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ShadowError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ShadowError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ShadowConfig = toml::from_str(&contents)
        .map_err(|e| ShadowError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ShadowError::Configuration(format!("Invalid substitution pattern: {}", e)))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ShadowError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_var(section: &str, key: &str) -> Option<(String, String)> {
    let name = format!("{}_{}_{}", ENV_PREFIX, section, key);
    std::env::var(&name).ok().map(|value| (name, value))
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ShadowError::Configuration(format!("Invalid value '{}' for {}", value, name))
    })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Applies environment variable overrides using the SHADOW_* prefix
///
/// Environment variables follow the pattern: SHADOW_<SECTION>_<KEY>
/// For example: SHADOW_DATA_ROOT, SHADOW_BENCHMARK_MAX_PARALLEL.
/// List values are comma separated.
fn apply_env_overrides(config: &mut ShadowConfig) -> Result<()> {
    // Application overrides
    if let Some((_, val)) = env_var("APPLICATION", "LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Some((name, val)) = env_var("APPLICATION", "DRY_RUN") {
        config.application.dry_run = parse_env(&name, &val)?;
    }

    // Data overrides
    if let Some((_, val)) = env_var("DATA", "ROOT") {
        config.data.root = PathBuf::from(val);
    }

    // Engine overrides
    if let Some((_, val)) = env_var("ENGINE", "COMMAND") {
        config.engine.command = val;
    }
    if let Some((_, val)) = env_var("ENGINE", "ARGS") {
        config.engine.args = val.split_whitespace().map(str::to_string).collect();
    }
    if let Some((_, val)) = env_var("ENGINE", "WORKING_DIR") {
        config.engine.working_dir = Some(PathBuf::from(val));
    }

    // Benchmark overrides
    if let Some((_, val)) = env_var("BENCHMARK", "DATASETS") {
        config.benchmark.datasets = split_list(&val);
    }
    if let Some((_, val)) = env_var("BENCHMARK", "STRATEGIES") {
        config.benchmark.strategies = split_list(&val);
    }
    if let Some((name, val)) = env_var("BENCHMARK", "SUPPRESSION_LIMIT") {
        config.benchmark.suppression_limit = parse_env(&name, &val)?;
    }
    if let Some((name, val)) = env_var("BENCHMARK", "MAX_PARALLEL") {
        config.benchmark.max_parallel = parse_env(&name, &val)?;
    }
    if let Some((_, val)) = env_var("BENCHMARK", "OUTPUT_DIR") {
        config.benchmark.output_dir = Some(PathBuf::from(val));
    }

    // Logging overrides
    if let Some((name, val)) = env_var("LOGGING", "LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env(&name, &val)?;
    }
    if let Some((_, val)) = env_var("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some((_, val)) = env_var("LOGGING", "LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
