use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

const EXAMPLE_DESCRIPTOR: &str = "models.trigger.json";

const EXAMPLE_CONTENT: &str = r#"{
  "entities": [
    {
      "name": "Counter",
      "attributes": [
        { "name": "count", "type": "int", "default": 0 },
        { "name": "label", "type": "str", "default": "n/a" },
        { "name": "enabled", "type": "bool", "default": true },
        { "name": "note", "type": "String?" }
      ]
    }
  ]
}
"#;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory holding descriptor files
    #[arg(short, long, default_value = "lib")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing trigger generation...".bright_blue().bold());

    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let example_file = src_dir.join(EXAMPLE_DESCRIPTOR);
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_CONTENT)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_DESCRIPTOR);
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        ..Default::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/{}", args.src_dir, EXAMPLE_DESCRIPTOR);
    println!("  2. Run: trigger-gen generate");
    println!("  3. Add `part 'models.g.dart';` to {}/models.dart", args.src_dir);

    Ok(())
}
