use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use stproto::schema_to_json;
use stproto_compiler::error::StprotoError;
use stproto_compiler::{compile_file, compile_schema, discover_schema_files};

#[derive(Parser)]
#[command(name = "stprotoc")]
#[command(about = "Compile stproto schemas to Rust wire codecs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile every `.stproto` file in a directory to a `.stproto.rs` source
    Gen {
        /// Schema file directory
        #[arg(short, long, default_value = "./")]
        dir: PathBuf,
    },

    /// Parse and verify a single `.stproto` file without generating code
    Check {
        /// Input `.stproto` file
        #[arg(short, long)]
        input: PathBuf,

        /// Pretty-print the parsed model as JSON
        #[arg(long)]
        dump: bool,
    },
}

fn main() -> Result<(), StprotoError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Gen { dir } => {
            // Each file is compiled completely before the next begins; the
            // first error halts the batch.
            let files = discover_schema_files(dir)?;
            for input in &files {
                println!("parsing {}...", input.display());
                let output = compile_file(input)?;
                println!("generated {}", output.display());
            }
            println!("stprotoc finished, {} file(s) generated", files.len());
            Ok(())
        }

        Commands::Check { input, dump } => {
            let name = input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("schema")
                .to_string();
            let text = fs::read_to_string(input)?;
            let schema = compile_schema(&name, &text)?;
            if *dump {
                println!("{}", schema_to_json(&schema));
            } else {
                println!(
                    "{}: {} struct(s), {} func(s)",
                    input.display(),
                    schema.structs.len(),
                    schema.funcs.len()
                );
            }
            Ok(())
        }
    }
}
