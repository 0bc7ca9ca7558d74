//! Scans a directory of PDFs in parallel and lists the unsigned ones.
//!
//! Usage:
//!   cargo run --example batch_scan -- ./inbox
//!   cargo run --example batch_scan -- ./inbox --threads 4

use pdfsigscan::{record_outcomes, scan_documents, MemoryStore, ScanConfig, SignatureStore};
use std::path::PathBuf;
use std::{env, fs, process};

const ENTITY: &str = "inbox";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <directory> [--threads <n>]", args[0]);
        process::exit(1);
    }

    let worker_threads = args
        .windows(2)
        .find(|w| w[0] == "--threads")
        .and_then(|w| w[1].parse().ok());

    let entries = fs::read_dir(&args[1]).unwrap_or_else(|e| {
        eprintln!("Cannot read directory: {e}");
        process::exit(1);
    });

    let documents: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("pdf")))
        .map(|p| (p.display().to_string(), p))
        .collect();

    let mut store = MemoryStore::new();
    let ids: Vec<String> = documents.iter().map(|(id, _)| id.clone()).collect();
    if let Err(e) = store.register_all(&ids, ENTITY) {
        eprintln!("Cannot register documents: {e}");
        process::exit(1);
    }

    let config = ScanConfig {
        worker_threads,
        ..Default::default()
    };
    let outcomes = scan_documents(&documents, &config);
    if let Err(e) = record_outcomes(&mut store, &outcomes) {
        eprintln!("Cannot record results: {e}");
        process::exit(1);
    }

    let stats = store.statistics(ENTITY);
    println!(
        "{} PDF(s): {} signed, {} unsigned, {} unreadable",
        stats.total,
        stats.signed,
        stats.unsigned,
        stats.total - stats.processed
    );

    for id in store.list_unsigned(ENTITY) {
        println!("  unsigned: {id}");
    }
}
