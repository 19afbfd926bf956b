//! Configuration management for the CLI.
//!
//! Configuration comes from a `zodgen.toml` file merged with command-line
//! overrides; CLI arguments always win.

use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use zodgen::{GeneratorConfig, Naming};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "zodgen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Naming conventions.
    pub naming: NamingConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Output filename.
    pub file: String,

    /// Whether to generate type inference exports.
    pub generate_types: bool,

    /// Whether to generate the file header and import preamble.
    pub generate_header: bool,
}

/// Naming convention configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Suffix for schema constant names.
    pub schema_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
            file: "schemas.ts".to_string(),
            generate_types: true,
            generate_header: true,
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            schema_suffix: "Schema".to_string(),
        }
    }
}

impl Config {
    /// Full path of the output file.
    pub fn output_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.file)
    }

    /// Translate into the core generator configuration.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_types(self.output.generate_types)
            .with_header(self.output.generate_header)
            .with_naming(Naming::with_suffix(self.naming.schema_suffix.clone()))
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// A missing default file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref file) = args.output_file {
            config.output.file = file.clone();
        }

        if let Some(generate_types) = args.generate_types {
            config.output.generate_types = generate_types;
        }

        if let Some(generate_header) = args.generate_header {
            config.output.generate_header = generate_header;
        }

        if let Some(ref suffix) = args.schema_suffix {
            config.naming.schema_suffix = suffix.clone();
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# zodgen configuration file

[output]
# Output directory for generated TypeScript files
dir = "./generated"

# Output file name
file = "schemas.ts"

# Whether to generate type inference exports (export type X = z.infer<typeof XSchema>)
generate_types = true

# Whether to emit the file header comment and the zod import
generate_header = true

[naming]
# Schema name suffix (e.g., UserSchema)
schema_suffix = "Schema"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Output filename override.
    pub output_file: Option<String>,

    /// Generate types override.
    pub generate_types: Option<bool>,

    /// Generate header override.
    pub generate_header: Option<bool>,

    /// Schema suffix override.
    pub schema_suffix: Option<String>,
}
