use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trigger_codegen::{CommandFormatter, Formatter, NoopFormatter, Variant};

pub const DEFAULT_CONFIG_NAME: &str = "trigger.config.json";

/// Trigger generator configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for descriptor files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Generated layout (basic, extended)
    #[serde(default)]
    pub variant: Variant,

    /// Run the formatter on generated files
    #[serde(default = "default_format")]
    pub format: bool,

    /// Formatter program and arguments; the generated file path is appended
    #[serde(default = "default_format_command")]
    pub format_command: Vec<String>,

    /// Output directory (defaults to the descriptor's directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
}

fn default_src_dir() -> String {
    ".".to_string()
}

fn default_format() -> bool {
    true
}

fn default_format_command() -> Vec<String> {
    vec!["dart".to_string(), "format".to_string()]
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    /// Formatter command built from `format` and `formatCommand`, if any
    pub fn formatter_command(&self) -> Option<CommandFormatter> {
        if !self.format {
            return None;
        }
        let (program, args) = self.format_command.split_first()?;
        Some(CommandFormatter::new(program.clone(), args.to_vec()))
    }

    /// Formatter to run after writing
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self.formatter_command() {
            Some(command) => Box::new(command),
            None => Box::new(NoopFormatter),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            variant: Variant::default(),
            format: default_format(),
            format_command: default_format_command(),
            out_dir: None,
        }
    }
}
