use crate::compiler::generate_unit;
use crate::error::{GenerateError, GenerateResult};
use crate::options::GenerateOptions;
use crate::registry::{Registry, DESCRIPTOR_SUFFIX};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Name of the Dart library a generated unit is a `part of`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitName(String);

impl UnitName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// File name with its extension stripped (`lib/models.json` → `models`).
    /// The `.trigger.json` descriptor suffix is stripped as a whole.
    pub fn from_path(path: &Path) -> GenerateResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GenerateError::InvalidUnitName(path.to_path_buf()))?;

        let stem = match file_name.strip_suffix(DESCRIPTOR_SUFFIX) {
            Some(stem) => stem,
            None => Path::new(file_name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(file_name),
        };

        if stem.is_empty() {
            return Err(GenerateError::InvalidUnitName(path.to_path_buf()));
        }

        Ok(Self(stem.to_string()))
    }

    /// Derived from the running program's own file name, for host programs
    /// that embed the generator
    pub fn from_current_exe() -> GenerateResult<Self> {
        let exe = std::env::current_exe()?;
        Self::from_path(&exe)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<name>.<ext>`, the library the unit belongs to
    pub fn library_file(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }

    /// `<name>.g.<ext>`, the generated file
    pub fn generated_file(&self, extension: &str) -> String {
        format!("{}.g.{}", self.0, extension)
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post-processing step run on a generated file. Failures are not reported.
pub trait Formatter {
    fn format(&self, path: &Path);
}

/// Runs an external command with the file path appended (`dart format <file>`)
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandFormatter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for CommandFormatter {
    fn default() -> Self {
        Self::new("dart", vec!["format".to_string()])
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, path: &Path) {
        match Command::new(&self.program).args(&self.args).arg(path).status() {
            Ok(status) if status.success() => {
                debug!(file = %path.display(), "Formatted generated file");
            }
            Ok(status) => {
                debug!(file = %path.display(), %status, "Formatter exited unsuccessfully");
            }
            Err(e) => {
                debug!(program = %self.program, error = %e, "Formatter could not be started");
            }
        }
    }
}

/// Leaves the generated file untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn format(&self, _path: &Path) {}
}

/// Generate a unit, write it to `<dir>/<unit>.g.<ext>` and run the formatter.
/// Returns the path written.
pub fn write_unit(
    registry: &Registry,
    unit: &UnitName,
    dir: &Path,
    options: &GenerateOptions,
    formatter: &dyn Formatter,
) -> GenerateResult<PathBuf> {
    let source = generate_unit(registry, unit, options);
    let output_file = dir.join(unit.generated_file(&options.extension));

    std::fs::write(&output_file, source)?;
    info!(
        unit = %unit,
        entities = registry.len(),
        file = %output_file.display(),
        "Wrote generated unit"
    );

    formatter.format(&output_file);

    Ok(output_file)
}
