use crate::error::StprotoError;
use crate::gen_rust::compile_schema_to_rust;
use crate::parser::parse_schema;
use crate::types::Schema;
use crate::verifier::verify_schema;

/// Compile a textual schema into a validated model.
/// Returns `Err(StprotoError)` if parsing, resolution, or verification fails.
pub fn compile_schema(name: &str, text: &str) -> Result<Schema, StprotoError> {
    let schema = parse_schema(name, text)?;
    verify_schema(&schema)?;
    Ok(schema)
}

/// Compile a textual schema straight to generated Rust source.
pub fn compile_text(name: &str, text: &str) -> Result<String, StprotoError> {
    let schema = compile_schema(name, text)?;
    Ok(compile_schema_to_rust(&schema))
}
