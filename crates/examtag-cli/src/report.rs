//! Console output for batch runs.

use examtag_core::Subject;
use examtag_runtime::{BatchReport, ExtractionMethod};

pub fn print_banner(subject: Option<Subject>, method: ExtractionMethod) {
    println!("CONCEPT EXTRACTION TOOL");
    match subject {
        Some(subject) => println!("Subject: {}", subject.title()),
        None => println!("Subject: detected per question"),
    }
    println!("Method: {}", method);
    println!("{}", "=".repeat(50));
}

pub fn print_batch_report(report: &BatchReport) {
    println!();
    println!("Results saved to: {}", report.output_path.display());

    if let Some(distribution) = &report.distribution {
        println!();
        println!("{}", distribution);
    }

    println!();
    println!("PROCESSING COMPLETE");
    println!("  Processed: {} questions", report.processed);
    if report.skipped > 0 {
        println!("  Skipped:   {} (empty question text)", report.skipped);
    }
    if report.llm_fallbacks > 0 {
        println!("  Keyword fallbacks after API errors: {}", report.llm_fallbacks);
    }
    println!("  Subject:   {}", report.subject);
    println!("  Output:    {}", report.output_path.display());
    println!("  Method:    {}", report.method);

    if report.method == ExtractionMethod::Keyword {
        println!("  Tip: use --use-api for more accurate concept extraction");
    }
}
