//! CLI tool for batch-extracting text from PDF files.
//!
//! This binary demonstrates the capabilities of the pdfintake crate: it plays
//! the role of the external collaborator, feeding candidate paths into the
//! intake controller and rendering the structured outcomes it gets back.

use pdfintake::{FileOutcome, IntakeConfig, IntakeController, Result};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_usage(&args[0]);
        process::exit(0);
    }

    // Everything that is not an option is a candidate file.
    let mut output_dir: Option<String> = None;
    let mut candidates: Vec<String> = Vec::new();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => match iter.next() {
                Some(dir) => output_dir = Some(dir.clone()),
                None => {
                    eprintln!("❌ {arg} requires a directory argument");
                    process::exit(1);
                }
            },
            other => candidates.push(other.to_string()),
        }
    }

    if candidates.is_empty() {
        print_usage(&args[0]);
        process::exit(1);
    }

    match run_batch(&candidates, output_dir) {
        Ok(true) => println!("\n✅ Batch completed successfully!"),
        Ok(false) => {
            eprintln!("\n❌ No file could be extracted");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("\n❌ Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_usage(program_name: &str) {
    println!("📄 pdfintake - Batch PDF Text Extraction Tool");
    println!();
    println!("USAGE:");
    println!("    {} <pdf_file>... [-o <output_dir>]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <pdf_file>...        PDF files to extract text from");
    println!();
    println!("OPTIONS:");
    println!("    -o, --output <dir>   Write <name>_extracted.txt artifacts into <dir>");
    println!("                         (default: next to each source file)");
    println!("    -h, --help           Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    {} report.pdf", program_name);
    println!("    {} a.pdf b.pdf -o ./extracted", program_name);
    println!();
    println!("This tool will:");
    println!("  • Validate and deduplicate the given paths");
    println!("  • Show page count, encryption flag and metadata per file");
    println!("  • Extract text page by page, one failure never stopping the batch");
    println!("  • Save the extracted text next to each file (or into --output)");
}

fn run_batch(candidates: &[String], output_dir: Option<String>) -> Result<bool> {
    let config = IntakeConfig {
        write_text_artifacts: true,
        output_directory: output_dir,
    };
    let mut intake = IntakeController::new(config);

    // Step 1: intake
    let added = intake.add(candidates);
    println!(
        "📥 Intake: {} accepted, {} duplicate, {} rejected",
        added.accepted, added.duplicate, added.rejected
    );

    if !intake.is_ready() {
        eprintln!("❌ No valid PDF files among the arguments");
        return Ok(false);
    }

    // Step 2: per-file information
    println!("{}", "─".repeat(60));
    for path in intake.list() {
        match intake.inspect(&path) {
            Ok(info) => {
                println!("📊 {}", path.display());
                println!("   📄 Pages: {}", info.page_count);
                println!("   🔒 Encrypted: {}", info.is_encrypted);
                for (key, value) in &info.metadata {
                    if let Some(value) = value {
                        println!("   📝 {}: {}", key, value);
                    }
                }
            }
            Err(e) => println!("⚠️  {}: {}", path.display(), e),
        }
    }

    // Step 3: extraction
    println!("{}", "─".repeat(60));
    println!("🚀 Extracting text:");
    let report = intake.process()?;

    for result in &report {
        match &result.outcome {
            FileOutcome::Success { pages, .. } => {
                println!("\n✅ {}", result.source.display());
                for page in pages {
                    println!("   📖 Page {}: {} characters", page.index + 1, page.char_count);
                }
            }
            FileOutcome::Failure { error } => {
                println!("\n❌ {}: {}", result.source.display(), error);
            }
        }
    }

    // Step 4: summary
    println!("\n{}", "─".repeat(60));
    println!("📊 Summary:");
    println!("   • {} file(s) extracted successfully", report.success_count());
    println!("   • {} file(s) failed", report.failure_count());
    println!("   • Total characters: {}", report.total_chars());

    Ok(report.success_count() > 0)
}
