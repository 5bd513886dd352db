//! Markbook CLI
//!
//! Command-line presentation layer for the gradebook. Owns all display
//! formatting; the core only hands back structured records and error kinds.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use markbook::{Config, Gradebook, MarkbookError, Result, StudentRecord};

/// Markbook CLI
#[derive(Parser, Debug)]
#[command(name = "markbook")]
#[command(about = "Student mark roster with derived grading")]
#[command(version)]
struct Args {
    /// Data file path
    #[arg(short, long, default_value = "./studentMarks.txt")]
    data_file: String,

    /// Emit JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new student record
    Add {
        /// Student ID (must be unique)
        id: String,

        /// Student name
        name: String,

        /// First coursework mark (0-20)
        cw1: u32,

        /// Second coursework mark (0-20)
        cw2: u32,

        /// Third coursework mark (0-20)
        cw3: u32,

        /// Exam mark (0-100)
        exam: u32,
    },

    /// Replace an existing student's marks
    Update {
        /// Student ID
        id: String,

        /// First coursework mark (0-20)
        cw1: u32,

        /// Second coursework mark (0-20)
        cw2: u32,

        /// Third coursework mark (0-20)
        cw3: u32,

        /// Exam mark (0-100)
        exam: u32,
    },

    /// Delete a student record
    Delete {
        /// Student ID
        id: String,
    },

    /// View one student's record
    View {
        /// Student ID
        id: String,
    },

    /// View all student records
    List,

    /// Search by name or ID
    Search {
        /// Search term (name match is case-insensitive, ID match is not)
        term: String,
    },

    /// Sort records by percentage
    Sort {
        /// Sort highest first
        #[arg(long)]
        descending: bool,
    },

    /// Show the highest-scoring student
    Highest,

    /// Show the lowest-scoring student
    Lowest,

    /// Show class statistics and grade distribution
    Stats,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,markbook=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder().data_file(&args.data_file).build();
    let mut book = match Gradebook::open(config) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Failed to open gradebook: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&mut book, &args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(book: &mut Gradebook, args: &Args) -> Result<()> {
    match &args.command {
        Commands::Add {
            id,
            name,
            cw1,
            cw2,
            cw3,
            exam,
        } => {
            let record = book.add(id, name, [*cw1, *cw2, *cw3], *exam)?;
            print_record(&record, args.json)?;
        }
        Commands::Update {
            id,
            cw1,
            cw2,
            cw3,
            exam,
        } => {
            let record = book.update(id, [*cw1, *cw2, *cw3], *exam)?;
            print_record(&record, args.json)?;
        }
        Commands::Delete { id } => {
            let record = book.delete(id)?;
            println!(
                "Deleted {} ({}). Remaining students: {}",
                record.name,
                record.id,
                book.len()
            );
        }
        Commands::View { id } => {
            let record = book.find(id)?;
            print_record(record, args.json)?;
        }
        Commands::List => {
            let records = book.roster().records();
            print_records(records.iter(), args.json)?;
            if !args.json && !records.is_empty() {
                let stats = book.statistics()?;
                println!("Total Students: {}", stats.count);
                println!("Average Percentage: {:.1}%", stats.average);
            }
        }
        Commands::Search { term } => {
            let matches = book.search(term);
            if matches.is_empty() {
                println!("No students found matching '{}'", term);
            } else {
                print_records(matches.into_iter(), args.json)?;
            }
        }
        Commands::Sort { descending } => {
            book.sort_by_percentage(*descending);
            print_records(book.roster().iter(), args.json)?;
        }
        Commands::Highest => {
            let record = book.highest()?;
            print_record(record, args.json)?;
        }
        Commands::Lowest => {
            let record = book.lowest()?;
            print_record(record, args.json)?;
        }
        Commands::Stats => {
            let stats = book.statistics()?;
            if args.json {
                println!("{}", to_json(&stats)?);
            } else {
                println!("Total Students: {}", stats.count);
                println!("Average Percentage: {:.1}%", stats.average);
                println!("Highest Percentage: {:.1}%", stats.max);
                println!("Lowest Percentage: {:.1}%", stats.min);
                println!("Grade Distribution:");
                for (grade, count) in &stats.grade_counts {
                    println!("  {} Grades: {}", grade, count);
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// Output Formatting
// =============================================================================

fn print_record(record: &StudentRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(record)?);
    } else {
        print!("{}", format_record(record));
    }
    Ok(())
}

fn print_records<'a>(
    records: impl Iterator<Item = &'a StudentRecord>,
    json: bool,
) -> Result<()> {
    if json {
        let records: Vec<&StudentRecord> = records.collect();
        println!("{}", to_json(&records)?);
    } else {
        for record in records {
            print!("{}", format_record(record));
        }
    }
    Ok(())
}

/// Multi-line text block for one record
fn format_record(record: &StudentRecord) -> String {
    format!(
        "Student Name: {}\n\
         Student ID: {}\n\
         Coursework Marks: {}, {}, {}\n\
         Coursework Total: {}/60\n\
         Exam Mark: {}/100\n\
         Overall Percentage: {:.1}%\n\
         Final Grade: {}\n\
         {}\n",
        record.name,
        record.id,
        record.coursework[0],
        record.coursework[1],
        record.coursework[2],
        record.coursework_total,
        record.exam,
        record.percentage,
        record.grade,
        "-".repeat(40)
    )
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| MarkbookError::InvalidInput(format!("JSON encoding failed: {}", e)))
}
