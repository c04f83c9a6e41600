//! Developer utility to validate a regression artifact and install it under
//! the canonical filename the dashboard loads.

use std::path::PathBuf;

use salescast::model::{MODEL_FILE_NAME, regression::RegressionModel};

const USAGE: &str = "Usage: salescast-model-import [--dest <dir>] <artifact.json>";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;

    let model = RegressionModel::load_json(&options.artifact)?;

    let dest_dir = options.dest.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dest_dir)
        .map_err(|err| format!("Failed to create {}: {err}", dest_dir.display()))?;
    let dest = dest_dir.join(MODEL_FILE_NAME);
    std::fs::copy(&options.artifact, &dest)
        .map_err(|err| format!("Failed to copy to {}: {err}", dest.display()))?;

    println!(
        "Installed {} at {} ({} features, intercept {:.4})",
        options.artifact.display(),
        dest.display(),
        model.coefficients.len(),
        model.intercept
    );
    Ok(())
}

#[derive(Debug, Clone)]
struct ImportOptions {
    artifact: PathBuf,
    dest: Option<PathBuf>,
}

fn parse_args(args: Vec<String>) -> Result<ImportOptions, String> {
    let mut artifact = None;
    let mut dest = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dest" => {
                let dir = iter
                    .next()
                    .ok_or_else(|| format!("--dest requires a directory\n{USAGE}"))?;
                dest = Some(PathBuf::from(dir));
            }
            "--help" | "-h" => return Err(USAGE.to_string()),
            value if artifact.is_none() => artifact = Some(PathBuf::from(value)),
            value => return Err(format!("Unexpected argument '{value}'\n{USAGE}")),
        }
    }
    let artifact = artifact.ok_or_else(|| USAGE.to_string())?;
    Ok(ImportOptions { artifact, dest })
}
