//! Init command implementation.

use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the init command.
///
/// Writes the default configuration to `path`. An existing file is left
/// alone unless `force` is set.
pub fn execute_init(path: &Path, force: bool, formatter: &Formatter) -> Result<String> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save(path)?;

    Ok(match formatter.format() {
        OutputFormat::Quiet => path.display().to_string(),
        _ => formatter.success(&format!("Configuration written to {}", path.display())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn quiet() -> Formatter {
        Formatter::new(OutputFormat::Quiet, false)
    }

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".counsel").join("config.toml");

        let output = execute_init(&path, false, &quiet()).unwrap();
        assert_eq!(output, path.display().to_string());

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.settings.default_limit, 50);
        assert_eq!(config.extractor.max_phones, 5);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nformat = \"json\"\n").unwrap();

        let result = execute_init(&path, false, &quiet());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(fs::read_to_string(&path).unwrap().contains("json"));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nformat = \"json\"\n").unwrap();

        let output = execute_init(&path, true, &Formatter::new(OutputFormat::Table, false)).unwrap();
        assert!(output.starts_with("✓ Configuration written to"));
        assert_eq!(Config::load(Some(&path)).unwrap().settings.format, OutputFormat::Table);
    }
}
