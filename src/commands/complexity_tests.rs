use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::EXIT_FAILURE;
use crate::cli::Commands;

const SOURCE: &str = "fn simple() {\n    run();\n}\n\nfn branching(x: i32) {\n    if x > 0 && x < 10 {\n        for _ in 0..x {}\n    }\n}\n";

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("qualmetrics").chain(args.iter().copied()))
}

fn complexity_args(cli: &Cli) -> &ComplexityArgs {
    match &cli.command {
        Commands::Complexity(args) => args,
        _ => panic!("Expected Complexity command"),
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn run_complexity_writes_table() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("lib.rs");
    let out = temp_dir.path().join("report.txt");
    fs::write(&file, SOURCE).unwrap();

    let cli = parse(&[
        "complexity",
        path_str(&file),
        "-o",
        path_str(&out),
        "--color",
        "never",
        "--no-config",
    ]);
    run_complexity_impl(complexity_args(&cli), &cli).unwrap();

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains(&format!("{:<40} {:>4}", "simple", 1)));
    assert!(report.contains(&format!("{:<40} {:>4}", "branching", 4)));
    assert!(report.contains("Most complex function: branching (CC = 4)"));
    assert!(report.contains("Maximum complexity: 4"));
}

#[test]
fn run_complexity_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("lib.rs");
    let out = temp_dir.path().join("report.json");
    fs::write(&file, SOURCE).unwrap();

    let cli = parse(&[
        "complexity",
        path_str(&file),
        "-f",
        "json",
        "-o",
        path_str(&out),
        "--no-config",
    ]);
    run_complexity_impl(complexity_args(&cli), &cli).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["functions"][0]["name"], "simple");
    assert_eq!(json["functions"][1]["start_line"], 5);
    assert_eq!(json["most_complex"]["complexity"], 4);
}

#[test]
fn run_complexity_no_functions() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("consts.rs");
    let out = temp_dir.path().join("report.txt");
    fs::write(&file, "const LIMIT: u32 = 10;\n").unwrap();

    let cli = parse(&[
        "complexity",
        path_str(&file),
        "-o",
        path_str(&out),
        "--no-config",
    ]);
    run_complexity_impl(complexity_args(&cli), &cli).unwrap();

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.starts_with("No functions found in"));
}

#[test]
fn run_complexity_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("absent.rs");

    let cli = parse(&["complexity", path_str(&file), "--no-config"]);

    assert_eq!(run_complexity(complexity_args(&cli), &cli), EXIT_FAILURE);
}
