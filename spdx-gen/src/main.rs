//! `spdx-gen` — generates Rust model types from an SPDX ontology file.
//!
//! Reads the SPDX model JSON-LD, extracts the normalized schema model, and
//! writes the generated module tree to the output directory. Exits 0 on
//! success and 1 on any extraction or generation failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use spdx_model::Model;

/// Generate Rust model types from an SPDX model JSON-LD file.
#[derive(Debug, Parser)]
#[command(name = "spdx-gen", about)]
struct Args {
    /// Path to the SPDX model JSON-LD file.
    #[arg(long)]
    spec: PathBuf,

    /// Output directory for generated code.
    #[arg(long)]
    out: PathBuf,

    /// Package name for the generated code.
    #[arg(long, default_value = "spdx")]
    pkg: String,

    /// SPDX version override (e.g. 3.1.0). Defaults to the version
    /// extracted from the ontology.
    #[arg(long)]
    version: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("spdx-gen: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut model = spdx_extract::extract_file(&args.spec)
        .with_context(|| format!("parse model {}", args.spec.display()))?;
    apply_version_override(&mut model, args.version.as_deref());

    let report = spdx_codegen::generate(&model, &args.pkg, &args.out)
        .with_context(|| format!("generate code into {}", args.out.display()))?;

    println!(
        "Generated {} structs and {} enums across {} files in {}",
        report.struct_count,
        report.enum_count,
        report.files.len(),
        args.out.display()
    );
    Ok(())
}

/// Replaces the extracted spec version when the flag was given.
fn apply_version_override(model: &mut Model, version: Option<&str>) {
    if let Some(version) = version {
        model.spec_version = version.to_owned();
    }
}
