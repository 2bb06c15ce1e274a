use std::fs;
use std::path::{Path, PathBuf};

use crate::compiler::compile_text;
use crate::error::StprotoError;

pub const SCHEMA_EXTENSION: &str = "stproto";

/// List the `.stproto` files directly inside `dir`, sorted for a
/// deterministic batch order. Subdirectories are not entered.
pub fn discover_schema_files(dir: &Path) -> Result<Vec<PathBuf>, StprotoError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_schema = path
            .extension()
            .map(|ext| ext == SCHEMA_EXTENSION)
            .unwrap_or(false);
        if path.is_file() && is_schema {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Compile one schema file and write the generated source next to it as
/// `<stem>.stproto.rs`. Returns the output path.
pub fn compile_file(input: &Path) -> Result<PathBuf, StprotoError> {
    let name = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("schema")
        .to_string();
    let text = fs::read_to_string(input)?;
    let generated = compile_text(&name, &text)?;
    let output = input.with_extension("stproto.rs");
    fs::write(&output, generated)?;
    Ok(output)
}

/// Compile every schema file in `dir`, each file completely before the next
/// begins. The first error aborts the whole batch.
pub fn compile_directory(dir: &Path) -> Result<Vec<PathBuf>, StprotoError> {
    let mut outputs = Vec::new();
    for input in discover_schema_files(dir)? {
        outputs.push(compile_file(&input)?);
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINT: &str = "struct point {\n  x int\n  y int\n}\n";

    #[test]
    fn discovery_filters_extension_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.stproto"), POINT).unwrap();
        fs::write(dir.path().join("b.stproto"), POINT).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a schema").unwrap();
        fs::create_dir(dir.path().join("sub.stproto")).unwrap();

        let files = discover_schema_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.stproto", "b.stproto"]);
    }

    #[test]
    fn batch_writes_one_artifact_per_schema() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.stproto"), POINT).unwrap();
        fs::write(
            dir.path().join("b.stproto"),
            "struct user {\n  name string\n}\n",
        )
        .unwrap();

        let outputs = compile_directory(dir.path()).unwrap();
        assert_eq!(outputs.len(), 2);
        assert!(dir.path().join("a.stproto.rs").is_file());
        assert!(dir.path().join("b.stproto.rs").is_file());

        let generated = fs::read_to_string(dir.path().join("a.stproto")).unwrap();
        assert!(generated.contains("struct point"));
        let generated = fs::read_to_string(dir.path().join("a.stproto.rs")).unwrap();
        assert!(generated.contains("pub struct Point {"));
    }

    #[test]
    fn batch_fails_fast_on_a_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.stproto"), POINT).unwrap();
        fs::write(dir.path().join("b.stproto"), "struct broken {}\n").unwrap();

        let err = compile_directory(dir.path()).unwrap_err();
        assert!(err.to_string().contains("at least one field"), "{}", err);
        // the file before the failure was already written, the rest halted
        assert!(dir.path().join("a.stproto.rs").is_file());
    }
}
