use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use vellum_cli::Args;

/// Collects all .svg files from a directory under the workspace `samples/`
fn collect_svg_files(relative: &str) -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../samples")
        .join(relative);

    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("svg")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &Path, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_svg_files("");

    assert!(!valid_samples.is_empty(), "No valid samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_filename = format!(
            "{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match vellum_cli::run(&args_for(sample_path, output_path.clone())) {
            Ok(()) => {
                let outline = fs::read_to_string(&output_path).expect("Outline was not written");
                assert!(
                    outline.starts_with("svg viewBox="),
                    "Outline of {} should start with the root",
                    sample_path.display()
                );
            }
            Err(e) => failed_samples.push((sample_path.clone(), e)),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid sample(s) failed unexpectedly", failed_samples.len());
    }

    println!("All {} valid samples passed", valid_samples.len());
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_svg_files("errors");

    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for sample_path in &error_samples {
        let output_filename = format!(
            "error_{}.txt",
            sample_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if vellum_cli::run(&args_for(sample_path, output_path.clone())).is_ok() {
            unexpectedly_succeeded.push(sample_path.clone());
        }
        assert!(
            !output_path.exists(),
            "No outline should be written for {}",
            sample_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("All {} error samples failed as expected", error_samples.len());
}

#[test]
fn e2e_missing_explicit_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let sample = collect_svg_files("").remove(0);

    let mut args = args_for(&sample, temp_dir.path().join("out.txt"));
    args.config = Some(
        temp_dir
            .path()
            .join("missing.toml")
            .to_string_lossy()
            .to_string(),
    );

    assert!(vellum_cli::run(&args).is_err());
}
