//! Line-by-line interactive entry on stdin.

use std::io::{self, BufRead, Write};

use examtag_runtime::{InteractiveOutcome, InteractiveSession};
use examtag_store::CsvStore;

pub fn run(store: &CsvStore) -> anyhow::Result<()> {
    println!("INTERACTIVE CONCEPT EXTRACTION MODE");
    println!("Enter complete questions in this format (or 'quit' to exit):");
    println!("Question,Option A,Option B,Option C,Option D,Ans.?");
    println!("Example:");
    println!("\"What was the capital of Magadha?\",\"Patliputra\",\"Taxila\",\"Ujjain\",\"Kashi\",A");
    println!();

    let session = InteractiveSession::new(store);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", "-".repeat(50));
        print!("Enter question with options: ");
        io::stdout().flush()?;

        // EOF ends the session like "quit".
        let Some(line) = lines.next().transpose()? else {
            println!();
            break;
        };

        match session.submit(&line)? {
            InteractiveOutcome::Quit => {
                println!("Goodbye!");
                break;
            }
            InteractiveOutcome::Empty => println!("Please enter a valid question"),
            InteractiveOutcome::Invalid(reason) => println!("Invalid format: {}", reason),
            InteractiveOutcome::Duplicate { subject } => {
                println!("Detected subject: {}", subject.title());
                println!("Duplicate question detected - skipping save");
            }
            InteractiveOutcome::Saved {
                subject,
                question_number,
                concepts,
                path,
            } => {
                println!("Detected subject: {}", subject.title());
                println!("Extracted Concepts: {}", concepts);
                println!("Saved as Question {} in {}", question_number, path.display());
            }
        }
    }

    Ok(())
}
