//! Minimal CLI that reports whether a single PDF carries a signature.
//!
//! Usage:
//!   cargo run --example check_signature -- contract.pdf

use pdfsigscan::SignatureAnalyzer;
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf_file>", args[0]);
        process::exit(1);
    }

    let pdf_path = &args[1];
    println!("Checking: {pdf_path}");

    let analyzer = SignatureAnalyzer::from_path(pdf_path).unwrap_or_else(|e| {
        eprintln!("Error reading PDF: {e}");
        process::exit(1);
    });

    match analyzer.is_pdf() {
        Ok(true) => println!("✓ Valid PDF"),
        Ok(false) => println!("⚠ Incomplete PDF structure (scanning anyway)"),
        Err(e) => println!("⚠ Not a parseable PDF: {e} (scanning anyway)"),
    }

    let details = analyzer.signature_details();
    if !details.has_signature {
        println!("  No signature found.");
        return;
    }

    println!("✓ Signed");
    if let Some(kind) = details.signature_type {
        println!("    Type   : {kind}");
    }
    if let Some(ref name) = details.signer_name {
        println!("    Signer : {name}");
    }
    match (&details.signature_date, details.signed_at()) {
        (Some(date), Some(_)) => println!("    Date   : {date}"),
        (Some(date), None) => println!("    Date   : {date} (not a calendar date)"),
        _ => {}
    }
}
