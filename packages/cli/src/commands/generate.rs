use super::collect_descriptors;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use trigger_codegen::{
    generate_unit, write_unit, Formatter, GenerateOptions, NoopFormatter, Registry, UnitName,
    Variant,
};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Descriptor file or directory (defaults to the configured source directory)
    pub path: Option<String>,

    /// Unit name used for `part of` and the output file (single descriptor only)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Skip the formatter
    #[arg(long)]
    pub no_format: bool,

    /// Generated layout (basic, extended)
    #[arg(long)]
    pub variant: Option<String>,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let input = match &args.path {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_src_dir(cwd),
    };

    let variant = match &args.variant {
        Some(v) => v.parse::<Variant>().map_err(|e| anyhow!(e))?,
        None => config.variant,
    };
    let options = GenerateOptions {
        variant,
        ..Default::default()
    };

    let formatter: Box<dyn Formatter> = if args.no_format {
        Box::new(NoopFormatter)
    } else {
        config.formatter()
    };

    let out_dir = args
        .out_dir
        .as_ref()
        .or(config.out_dir.as_ref())
        .map(|dir| PathBuf::from(cwd).join(dir));

    let descriptors = collect_descriptors(&input)?;
    debug!(
        input = %input.display(),
        descriptors = descriptors.len(),
        %variant,
        "Resolved descriptor files"
    );

    if descriptors.is_empty() {
        println!("{}", "⚠️  No descriptor files found".yellow());
        return Ok(());
    }

    if args.unit.is_some() && descriptors.len() > 1 {
        return Err(anyhow!(
            "--unit can only be used with a single descriptor, found {}",
            descriptors.len()
        ));
    }

    if let (Some(dir), false) = (out_dir.as_deref(), args.stdout) {
        check_output_collisions(&descriptors, dir, &options)?;
    }

    if !args.stdout {
        println!("{}", "🔨 Generating trigger code...".bright_blue().bold());
        println!("Found {} descriptors ({} variant)", descriptors.len(), variant);
    }

    let base = if input.is_dir() {
        input.as_path()
    } else {
        input.parent().unwrap_or(input.as_path())
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for descriptor in &descriptors {
        let relative_path = descriptor.strip_prefix(base).unwrap_or(descriptor);
        match generate_file(
            descriptor,
            &args,
            &options,
            out_dir.as_deref(),
            formatter.as_ref(),
        ) {
            Ok(output_path) => {
                success_count += 1;
                if !args.stdout {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        relative_path.display(),
                        output_path
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    if args.stdout {
        return if error_count == 0 {
            Ok(())
        } else {
            Err(anyhow!("{} descriptors failed", error_count))
        };
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Generated {} units successfully",
            "✅".green(),
            success_count
        );
        Ok(())
    } else {
        println!(
            "{} Generated {} units, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
        Err(anyhow!("{} descriptors failed", error_count))
    }
}

/// Fail when two descriptors would write the same file into `out_dir`
fn check_output_collisions(
    descriptors: &[PathBuf],
    out_dir: &Path,
    options: &GenerateOptions,
) -> Result<()> {
    let mut targets: HashMap<PathBuf, &Path> = HashMap::new();

    for descriptor in descriptors {
        // Unreadable names are reported per descriptor later
        let Ok(unit) = UnitName::from_path(descriptor) else {
            continue;
        };
        let target = out_dir.join(unit.generated_file(&options.extension));
        if let Some(previous) = targets.insert(target.clone(), descriptor) {
            return Err(anyhow!(
                "{} and {} would both write {}",
                previous.display(),
                descriptor.display(),
                target.display()
            ));
        }
    }

    Ok(())
}

fn generate_file(
    descriptor: &Path,
    args: &GenerateArgs,
    options: &GenerateOptions,
    out_dir: Option<&Path>,
    formatter: &dyn Formatter,
) -> Result<String> {
    let registry = Registry::load(descriptor)?;

    let unit = match &args.unit {
        Some(name) => UnitName::new(name.clone()),
        None => UnitName::from_path(descriptor)?,
    };

    if args.stdout {
        print!("{}", generate_unit(&registry, &unit, options));
        return Ok("stdout".to_string());
    }

    let dir = match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            dir.to_path_buf()
        }
        None => descriptor
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let output_file = write_unit(&registry, &unit, &dir, options, formatter)?;
    Ok(output_file.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_NAME;
    use tempfile::TempDir;

    const COUNTER: &str = r#"{
        "entities": [
            {
                "name": "Counter",
                "attributes": [
                    { "name": "count", "type": "int" },
                    { "name": "label", "type": "str", "default": "n/a" }
                ]
            }
        ]
    }"#;

    fn args(path: &str) -> GenerateArgs {
        GenerateArgs {
            path: Some(path.to_string()),
            unit: None,
            out_dir: None,
            stdout: false,
            no_format: true,
            variant: None,
        }
    }

    fn cwd(dir: &TempDir) -> String {
        dir.path().display().to_string()
    }

    #[test]
    fn test_generate_next_to_descriptor() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/counter.trigger.json"), COUNTER).unwrap();

        generate(args("lib"), &cwd(&dir)).unwrap();

        let output = fs::read_to_string(dir.path().join("lib/counter.g.dart")).unwrap();
        assert!(output.contains("part of 'counter.dart';"));
        assert!(output.contains("label = 'n/a';"));
    }

    #[test]
    fn test_generate_with_unit_and_out_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("models.json"), COUNTER).unwrap();

        let mut args = args("models.json");
        args.unit = Some("app_state".to_string());
        args.out_dir = Some("gen".to_string());
        args.variant = Some("basic".to_string());

        generate(args, &cwd(&dir)).unwrap();

        let output = fs::read_to_string(dir.path().join("gen/app_state.g.dart")).unwrap();
        assert!(output.starts_with("part of 'app_state.dart';"));
        assert!(output.contains("static Counter? _instance;"));
    }

    #[test]
    fn test_generate_rejects_unknown_variant() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("models.json"), COUNTER).unwrap();

        let mut args = args("models.json");
        args.variant = Some("fancy".to_string());

        assert!(generate(args, &cwd(&dir)).is_err());
    }

    #[test]
    fn test_generate_reports_invalid_descriptor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.trigger.json"), "{ not json").unwrap();

        assert!(generate(args("."), &cwd(&dir)).is_err());
        assert!(!dir.path().join("broken.g.dart").exists());
    }

    #[test]
    fn test_unit_requires_single_descriptor() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.trigger.json"), COUNTER).unwrap();
        fs::write(dir.path().join("b.trigger.json"), COUNTER).unwrap();

        let mut args = args(".");
        args.unit = Some("merged".to_string());

        assert!(generate(args, &cwd(&dir)).is_err());
    }

    #[test]
    fn test_out_dir_collision_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("lib/a")).unwrap();
        fs::create_dir_all(dir.path().join("lib/b")).unwrap();
        fs::write(dir.path().join("lib/a/models.trigger.json"), COUNTER).unwrap();
        fs::write(dir.path().join("lib/b/models.trigger.json"), COUNTER).unwrap();

        let mut shared_out_dir = args("lib");
        shared_out_dir.out_dir = Some("gen".to_string());

        let err = generate(shared_out_dir, &cwd(&dir)).unwrap_err();
        assert!(err.to_string().contains("models.g.dart"));
        assert!(!dir.path().join("gen/models.g.dart").exists());

        // Next to each descriptor the same stems do not collide
        generate(args("lib"), &cwd(&dir)).unwrap();
        assert!(dir.path().join("lib/a/models.g.dart").exists());
        assert!(dir.path().join("lib/b/models.g.dart").exists());
    }

    #[test]
    fn test_stdout_writes_no_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("counter.trigger.json"), COUNTER).unwrap();

        let mut args = args(".");
        args.stdout = true;
        args.out_dir = Some("gen".to_string());

        generate(args, &cwd(&dir)).unwrap();

        assert!(!dir.path().join("counter.g.dart").exists());
        assert!(!dir.path().join("gen").exists());
    }

    #[test]
    fn test_variant_from_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "srcDir": "lib", "variant": "basic", "outDir": "gen" }"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/counter.trigger.json"), COUNTER).unwrap();

        let mut from_config = args("lib");
        from_config.path = None;
        generate(from_config, &cwd(&dir)).unwrap();

        let output = fs::read_to_string(dir.path().join("gen/counter.g.dart")).unwrap();
        assert!(output.contains("static Counter? _instance;"));
        assert!(!output.contains("multiSet"));

        // The flag still wins over the config
        let mut overridden = args("lib");
        overridden.variant = Some("extended".to_string());
        generate(overridden, &cwd(&dir)).unwrap();

        let output = fs::read_to_string(dir.path().join("gen/counter.g.dart")).unwrap();
        assert!(output.contains("base class Counter extends Trigger"));
    }

    #[cfg(unix)]
    #[test]
    fn test_format_command_from_config_runs_on_output() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "formatCommand": ["sh", "-c", "touch \"$0.formatted\""] }"#,
        )
        .unwrap();
        fs::write(dir.path().join("counter.trigger.json"), COUNTER).unwrap();

        let mut formatted = args(".");
        formatted.no_format = false;
        generate(formatted, &cwd(&dir)).unwrap();
        assert!(dir.path().join("counter.g.dart.formatted").exists());

        // `--no-format` skips the configured command
        fs::remove_file(dir.path().join("counter.g.dart.formatted")).unwrap();
        generate(args("."), &cwd(&dir)).unwrap();
        assert!(!dir.path().join("counter.g.dart.formatted").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_format_disabled_in_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "format": false, "formatCommand": ["sh", "-c", "touch \"$0.formatted\""] }"#,
        )
        .unwrap();
        fs::write(dir.path().join("counter.trigger.json"), COUNTER).unwrap();

        let mut args = args(".");
        args.no_format = false;
        generate(args, &cwd(&dir)).unwrap();

        assert!(dir.path().join("counter.g.dart").exists());
        assert!(!dir.path().join("counter.g.dart.formatted").exists());
    }
}
