use super::collect_descriptors;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use trigger_codegen::{check_registry, CheckOptions, Diagnostic, DiagnosticLevel, Registry};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Descriptor file or directory (defaults to the configured source directory)
    pub path: Option<String>,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Default)]
struct Totals {
    diagnostics: usize,
    errors: usize,
    warnings: usize,
}

impl Totals {
    fn add(&mut self, diagnostics: &[Diagnostic]) {
        self.diagnostics += diagnostics.len();
        self.errors += diagnostics.iter().filter(|d| d.is_error()).count();
        self.warnings += diagnostics
            .iter()
            .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
            .count();
    }
}

/// Diagnostics of one descriptor file
#[derive(Debug)]
struct FileReport {
    path: PathBuf,
    diagnostics: Vec<Diagnostic>,
}

/// A diagnostic tagged with the file it came from, as printed in JSON mode
#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    file: String,
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
}

pub fn check(args: CheckArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = match &args.path {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_src_dir(cwd),
    };
    let json = args.format == "json";

    if !json {
        println!("🔍 {} descriptor check", "Starting".green().bold());
        println!("   Input: {}", input.display());
        println!();
    }

    let descriptors = collect_descriptors(&input)?;
    let mut totals = Totals::default();
    let mut reports = Vec::new();

    for descriptor in &descriptors {
        match check_file(descriptor) {
            Ok(report) => {
                totals.add(&report.diagnostics);
                if !json {
                    print_report(&report, args.verbose);
                }
                reports.push(report);
            }
            Err(err) => {
                totals.errors += 1;
                eprintln!(
                    "{} Failed to load {}: {}",
                    "✗".red(),
                    descriptor.display(),
                    err
                );
            }
        }
    }

    if json {
        println!("{}", render_json(&reports)?);
    } else {
        print_totals(&totals, descriptors.len());
    }

    if totals.errors > 0 {
        return Err(anyhow!("{} errors found", totals.errors));
    }

    Ok(())
}

fn check_file(file_path: &Path) -> Result<FileReport> {
    let registry = Registry::load(file_path)?;
    Ok(FileReport {
        path: file_path.to_path_buf(),
        diagnostics: check_registry(&registry, CheckOptions::default()),
    })
}

/// One array holding the diagnostics of every file, in file order
fn render_json(reports: &[FileReport]) -> Result<String> {
    let entries: Vec<JsonDiagnostic> = reports
        .iter()
        .flat_map(|report| {
            report.diagnostics.iter().map(|diagnostic| JsonDiagnostic {
                file: report.path.display().to_string(),
                diagnostic,
            })
        })
        .collect();

    Ok(serde_json::to_string_pretty(&entries)?)
}

fn print_report(report: &FileReport, verbose: bool) {
    if report.diagnostics.is_empty() {
        if verbose {
            println!("{} {}", "✓".green(), report.path.display());
        }
        return;
    }

    println!("{}", report.path.display());

    for diagnostic in &report.diagnostics {
        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        if !verbose && matches!(diagnostic.level, DiagnosticLevel::Info) {
            continue;
        }

        let location = match &diagnostic.attribute {
            Some(attribute) => format!("{}.{}", diagnostic.entity, attribute),
            None => diagnostic.entity.clone(),
        };

        println!(
            "  {} [{}] {}: {}",
            level_str, diagnostic.rule, location, diagnostic.message
        );

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }

    println!();
}

fn print_totals(totals: &Totals, files: usize) {
    println!();
    println!(
        "✨ {} Check complete!",
        if totals.errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", files);
    println!("   Total diagnostics: {}", totals.diagnostics);

    if totals.errors > 0 {
        println!("   {} {}", "Errors:".red(), totals.errors);
    }
    if totals.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), totals.warnings);
    }

    if totals.errors == 0 && totals.warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}
