//! stproto-compiler
//!
//! This crate implements:
//!  1) A parser for `.stproto` schema files (struct and func blocks),
//!  2) A recursive type resolver (`resolve` → `WireType` trees),
//!  3) A schema verifier (struct cycles, field-count bounds),
//!  4) Code generation (`compile_schema_to_rust` → `String`),
//!  5) A batch driver (directory discovery, one artifact per schema file),
//!  6) Error types (`StprotoError`).

pub mod compiler;
pub mod driver;
pub mod error;
pub mod gen_rust;
pub mod parser;
pub mod resolver;
pub mod types;
pub mod utils;
pub mod verifier;

pub use compiler::{compile_schema, compile_text};
pub use driver::{compile_directory, compile_file, discover_schema_files};
pub use error::StprotoError;
pub use gen_rust::compile_schema_to_rust;
