use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::LevelFilter;

use sparse_matrix::config::{DEFAULT_LOG_FILTER, LOG_ENV};
use sparse_matrix::{Operation, RunConfig, SparseMatrix};

fn print_usage() {
    println!("Usage: sparse-matrix <operation> <matrix_file_1> <matrix_file_2>");
    println!();
    println!("Available operations: add, subtract, multiply");
}

fn report(label: &str, matrix: &SparseMatrix) {
    log::info!("{} dimensions: {}x{}", label, matrix.rows(), matrix.cols());
    log::info!("{} values: {:?}", label, matrix.sorted_entries());
}

fn run(operation: Operation, left_path: &Path, right_path: &Path, config: &RunConfig) -> Result<()> {
    let left: SparseMatrix = SparseMatrix::create_from_file(left_path)?;
    let right: SparseMatrix = SparseMatrix::create_from_file(right_path)?;
    report("Matrix 1", &left);
    report("Matrix 2", &right);

    let result = operation.apply(&left, &right)?;

    let output = config.output_path(operation);
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;
    result
        .write_to_file(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    log::info!("Results saved to {}", output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER))
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        print_usage();
        return ExitCode::FAILURE;
    }

    let operation = match args[1].parse::<Operation>() {
        Ok(op) => op,
        Err(e) => {
            eprintln!("Invalid operation: {}", e.0);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let config = RunConfig::from_env();
    match run(operation, Path::new(&args[2]), Path::new(&args[3]), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
