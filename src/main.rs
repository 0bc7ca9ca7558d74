//! CLI tool for detecting digital signatures in PDF documents.
//!
//! Scans every given file, prints what it found and, with `--store`, records
//! the results in a JSON tracking file.

use pdfsigscan::{
    record_outcomes, scan_documents, JsonFileStore, Result, ScanConfig, ScanOutcome,
    SignatureStore,
};
use std::path::PathBuf;
use std::{env, process};

const DEFAULT_ENTITY: &str = "document";

struct CliOptions {
    json: bool,
    check_structure: bool,
    store: Option<PathBuf>,
    entity: String,
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_usage(&args[0]);
        process::exit(0);
    }

    let options = match parse_args(&args[1..]) {
        Some(o) if !o.files.is_empty() => o,
        _ => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("\n❌ Error: {}", e);
        process::exit(1);
    }
}

fn print_usage(program_name: &str) {
    println!("🔏 pdfsigscan - PDF Signature Detection Tool");
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <pdf_file>...", program_name);
    println!();
    println!("OPTIONS:");
    println!("    --json             Print one JSON object per document");
    println!("    --structure        Also check that each file is a parseable PDF");
    println!("    --store <file>     Record results in a JSON tracking file");
    println!("    --entity <name>    Entity to record documents under (default: '{DEFAULT_ENTITY}')");
    println!("    -h, --help         Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    {} contract.pdf", program_name);
    println!("    {} --store signatures.json scans/*.pdf", program_name);
    println!();
    println!("Set RUST_LOG=debug for per-document diagnostics.");
}

fn parse_args(args: &[String]) -> Option<CliOptions> {
    let mut options = CliOptions {
        json: false,
        check_structure: false,
        store: None,
        entity: DEFAULT_ENTITY.to_string(),
        files: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--structure" => options.check_structure = true,
            "--store" => options.store = Some(PathBuf::from(iter.next()?)),
            "--entity" => options.entity = iter.next()?.clone(),
            flag if flag.starts_with("--") => {
                eprintln!("Unknown option: {flag}");
                return None;
            }
            file => options.files.push(PathBuf::from(file)),
        }
    }

    Some(options)
}

fn run(options: &CliOptions) -> Result<()> {
    let config = ScanConfig {
        check_structure: options.check_structure,
        max_file_size: Some(512 * 1024 * 1024),
        worker_threads: None,
    };

    let documents: Vec<(String, PathBuf)> = options
        .files
        .iter()
        .map(|p| (p.display().to_string(), p.clone()))
        .collect();

    let outcomes = scan_documents(&documents, &config);

    for outcome in &outcomes {
        if options.json {
            print_json(outcome)?;
        } else {
            print_report(outcome);
        }
    }

    if let Some(ref store_path) = options.store {
        let mut store = JsonFileStore::open(store_path)?;
        let ids: Vec<String> = documents.iter().map(|(id, _)| id.clone()).collect();
        store.register_all(&ids, &options.entity)?;
        let stored = record_outcomes(&mut store, &outcomes)?;

        if !options.json {
            let stats = store.statistics(&options.entity);
            println!("\n{}", "─".repeat(60));
            println!("📊 Store: {}", store_path.display());
            println!("   • {} result(s) recorded", stored);
            println!(
                "   • {} document(s): {} signed, {} unsigned, {} pending",
                stats.total,
                stats.signed,
                stats.unsigned,
                stats.total - stats.processed
            );
            for (kind, count) in &stats.by_type {
                println!("   • {}: {}", kind, count);
            }
        }
    }

    Ok(())
}

fn print_report(outcome: &ScanOutcome) {
    println!("\n📄 {}", outcome.path.display());

    let report = match &outcome.result {
        Ok(r) => r,
        Err(e) => {
            println!("   ⚠️  Could not read file: {}", e);
            return;
        }
    };

    if let Some(is_pdf) = report.is_pdf {
        println!("   📋 Structure: {}", if is_pdf { "valid PDF" } else { "not a parseable PDF" });
    }

    let details = &report.details;
    if !details.has_signature {
        println!("   ℹ️  No signature found");
        return;
    }

    println!("   ✅ Signed");
    if let Some(kind) = details.signature_type {
        println!("   🏷️  Type: {}", kind);
    }
    if let Some(ref name) = details.signer_name {
        println!("   👤 Signer: {}", name);
    }
    if let Some(ref date) = details.signature_date {
        println!("   📅 Signed at: {}", date);
    }
}

fn print_json(outcome: &ScanOutcome) -> Result<()> {
    let value = match &outcome.result {
        Ok(report) => serde_json::json!({
            "document": outcome.document_id,
            "details": report.details,
            "is_pdf": report.is_pdf,
        }),
        Err(e) => serde_json::json!({
            "document": outcome.document_id,
            "error": e,
        }),
    };
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}
