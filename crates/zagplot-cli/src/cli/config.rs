//! Configuration files.
//!
//! A config file is YAML holding any subset of [`Configuration`]'s fields;
//! missing fields keep their defaults.
//!
//! ```yaml
//! size:
//!   width: 200
//!   height: 150
//! line_separation: 0.3
//! plot_angle: 30
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use zagplot::Configuration;

/// Load a configuration file. An empty file yields the defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    if content.trim().is_empty() {
        debug!(path = %path.display(), "empty config file, using defaults");
        return Ok(Configuration::default());
    }

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config YAML {}", path.display()))
}

/// `zagplot config`: print the default configuration as YAML.
pub fn cmd_config(output: Option<PathBuf>) -> Result<()> {
    let yaml = serde_yaml::to_string(&Configuration::default())
        .context("Failed to serialize configuration")?;

    match output {
        Some(path) => {
            fs::write(&path, &yaml)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote: {}", path.display());
        }
        None => {
            io::stdout().write_all(yaml.as_bytes())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = config_file("plot_angle: 30\nsize:\n  width: 20\n  height: 10\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.plot_angle, 30.0);
        assert_eq!(config.size.width, 20.0);
        assert_eq!(config.size.height, 10.0);
        assert_eq!(config.line_separation, 0.4);
        assert_eq!(config.plot_start, "STARTPLOT");
    }

    #[test]
    fn empty_file_is_default() {
        let file = config_file("  \n");
        assert_eq!(load_config(file.path()).unwrap(), Configuration::default());
    }

    #[test]
    fn defaults_survive_yaml() {
        let yaml = serde_yaml::to_string(&Configuration::default()).unwrap();
        let back: Configuration = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, Configuration::default());
    }

    #[test]
    fn bad_yaml_names_the_file() {
        let file = config_file("plot_angle: [not, a, number]\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config YAML"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config("/nonexistent/zagplot.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
