use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE};

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("qualmetrics").chain(args.iter().copied()))
}

fn similarity_args(cli: &Cli) -> &SimilarityArgs {
    match &cli.command {
        Commands::Similarity(args) => args,
        _ => panic!("Expected Similarity command"),
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn write_pair(dir: &TempDir, reference: &str, candidate: &str) -> (String, String) {
    let r = dir.path().join("reference.rs");
    let c = dir.path().join("candidate.rs");
    fs::write(&r, reference).unwrap();
    fs::write(&c, candidate).unwrap();
    (path_str(&r).to_string(), path_str(&c).to_string())
}

#[test]
fn run_similarity_identical_files() {
    let temp_dir = TempDir::new().unwrap();
    let text = "fn main ( ) { println ! ( \"hi\" ) ; }";
    let (r, c) = write_pair(&temp_dir, text, text);
    let out = temp_dir.path().join("score.txt");

    let cli = parse(&["similarity", &r, &c, "-o", path_str(&out), "--no-config"]);
    run_similarity_impl(similarity_args(&cli), &cli).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Similarity: 1.000\n");
}

#[test]
fn run_similarity_disjoint_files() {
    let temp_dir = TempDir::new().unwrap();
    let (r, c) = write_pair(&temp_dir, "a b c d e", "v w x y z");
    let out = temp_dir.path().join("score.txt");

    let cli = parse(&["similarity", &r, &c, "-o", path_str(&out), "--no-config"]);
    run_similarity_impl(similarity_args(&cli), &cli).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Similarity: 0.000\n");
}

#[test]
fn run_similarity_json_counts_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let (r, c) = write_pair(&temp_dir, "a b c d", "a b c d e f");
    let out = temp_dir.path().join("score.json");

    let cli = parse(&[
        "similarity",
        &r,
        &c,
        "--format",
        "json",
        "-o",
        path_str(&out),
        "--no-config",
    ]);
    run_similarity_impl(similarity_args(&cli), &cli).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["reference_tokens"], 4);
    assert_eq!(json["candidate_tokens"], 6);
}

#[test]
fn run_similarity_configured_order() {
    let temp_dir = TempDir::new().unwrap();
    // No shared bigram, so only unigram scoring can be non-zero
    let (r, c) = write_pair(&temp_dir, "a b c", "c b a");
    let config = temp_dir.path().join("qm.toml");
    let out = temp_dir.path().join("score.txt");
    fs::write(&config, "[similarity]\nmax_ngram = 1\n").unwrap();

    let cli = parse(&[
        "similarity",
        &r,
        &c,
        "-o",
        path_str(&out),
        "--config",
        path_str(&config),
    ]);
    run_similarity_impl(similarity_args(&cli), &cli).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "Similarity: 1.000\n");
}

#[test]
fn run_similarity_missing_candidate() {
    let temp_dir = TempDir::new().unwrap();
    let (r, _) = write_pair(&temp_dir, "a", "a");
    let missing = temp_dir.path().join("absent.rs");

    let cli = parse(&["similarity", &r, path_str(&missing), "--no-config"]);

    assert_eq!(run_similarity(similarity_args(&cli), &cli), EXIT_FAILURE);
}

#[test]
fn run_similarity_out_of_range_order() {
    let temp_dir = TempDir::new().unwrap();
    let (r, c) = write_pair(&temp_dir, "a", "a");
    let config = temp_dir.path().join("qm.toml");
    fs::write(&config, "[similarity]\nmax_ngram = 0\n").unwrap();

    let cli = parse(&["similarity", &r, &c, "--config", path_str(&config)]);

    assert_eq!(run_similarity(similarity_args(&cli), &cli), EXIT_CONFIG_ERROR);
}
