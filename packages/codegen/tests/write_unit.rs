use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use trigger_codegen::{
    generate_unit, write_unit, Attribute, AttributeType, CommandFormatter, Entity, Formatter,
    GenerateError, GenerateOptions, NoopFormatter, Registry, UnitName,
};

/// Records every path it is asked to format
#[derive(Default)]
struct RecordingFormatter {
    calls: RefCell<Vec<PathBuf>>,
}

impl Formatter for RecordingFormatter {
    fn format(&self, path: &Path) {
        self.calls.borrow_mut().push(path.to_path_buf());
    }
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(
        Entity::new("Counter")
            .attribute(Attribute::new("count", AttributeType::Integer))
            .attribute(Attribute::new("label", AttributeType::Text).with_default("n/a")),
    );
    registry
}

#[test]
fn test_writes_generated_file_and_formats_it() {
    let dir = TempDir::new().unwrap();
    let unit = UnitName::new("counter");
    let options = GenerateOptions::default();
    let formatter = RecordingFormatter::default();

    let path = write_unit(&registry(), &unit, dir.path(), &options, &formatter).unwrap();

    assert_eq!(path, dir.path().join("counter.g.dart"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        generate_unit(&registry(), &unit, &options)
    );
    assert_eq!(*formatter.calls.borrow(), vec![path]);
}

#[test]
fn test_rewrite_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let unit = UnitName::new("counter");
    let options = GenerateOptions::default();

    let path = write_unit(&registry(), &unit, dir.path(), &options, &NoopFormatter).unwrap();
    let first = fs::read(&path).unwrap();

    write_unit(&registry(), &unit, dir.path(), &options, &NoopFormatter).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_custom_extension() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions {
        extension: "part".to_string(),
        ..Default::default()
    };

    let path = write_unit(
        &registry(),
        &UnitName::new("models"),
        dir.path(),
        &options,
        &NoopFormatter,
    )
    .unwrap();

    assert_eq!(path.file_name().unwrap(), "models.g.part");
    assert!(fs::read_to_string(&path)
        .unwrap()
        .contains("part of 'models.part';"));
}

#[test]
fn test_write_failure_propagates() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing").join("nested");
    let formatter = RecordingFormatter::default();

    let result = write_unit(
        &registry(),
        &UnitName::new("counter"),
        &missing,
        &GenerateOptions::default(),
        &formatter,
    );

    assert!(matches!(result, Err(GenerateError::Io(_))));
    assert!(formatter.calls.borrow().is_empty());
}

#[test]
fn test_failing_formatter_leaves_output_intact() {
    let dir = TempDir::new().unwrap();
    let formatter = CommandFormatter::new("trigger-gen-missing-formatter", vec!["format".into()]);

    let path = write_unit(
        &registry(),
        &UnitName::new("counter"),
        dir.path(),
        &GenerateOptions::default(),
        &formatter,
    )
    .unwrap();

    assert!(fs::read_to_string(path)
        .unwrap()
        .contains("int get count => getValue('count')!;"));
}

#[test]
fn test_load_descriptor_file() {
    let dir = TempDir::new().unwrap();
    let descriptor = dir.path().join("state.trigger.json");
    fs::write(
        &descriptor,
        r#"{ "entities": [ { "name": "Session", "attributes": [
            { "name": "token", "type": "String?" },
            { "name": "loggedIn", "type": "bool", "default": "False" }
        ] } ] }"#,
    )
    .unwrap();

    let registry = Registry::load(&descriptor).unwrap();
    let unit = UnitName::from_path(&descriptor).unwrap();
    let path = write_unit(
        &registry,
        &unit,
        dir.path(),
        &GenerateOptions::default(),
        &NoopFormatter,
    )
    .unwrap();

    assert_eq!(path.file_name().unwrap(), "state.g.dart");

    let source = fs::read_to_string(path).unwrap();
    assert!(source.contains("part of 'state.dart';"));
    assert!(source.contains("String? get token => getValue('token');"));
    assert!(source.contains("bool get loggedIn => getValue('loggedIn')!;"));
    assert!(source.contains("loggedIn = false;"));
    assert!(source.contains("token = null;"));
}

#[test]
fn test_load_missing_descriptor() {
    let dir = TempDir::new().unwrap();
    let result = Registry::load(&dir.path().join("nope.trigger.json"));
    assert!(matches!(result, Err(GenerateError::Io(_))));
}
