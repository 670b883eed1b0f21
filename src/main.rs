use anyhow::Result;
use clap::Parser;
use rsrank::{load_directory, ScoredDocument, SearchEngine};
use std::io::{self, BufRead, Write};
use std::time::Instant;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "TF-IDF ranked retrieval over a plain-text corpus", long_about = None)]
struct Args {
    /// Directory of *.txt documents to index
    #[arg(short, long, default_value = "corpus")]
    path: String,

    /// Run a single query and exit instead of starting the interactive prompt
    #[arg(short, long)]
    query: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn print_results(results: &[ScoredDocument], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matching documents");
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        println!("{:>2}. {}\t{}", i + 1, result.doc_id, result.score);
    }
    Ok(())
}

// Perform one search and display results
fn do_search(engine: &SearchEngine, query: &str, json: bool) -> Result<()> {
    let start = Instant::now();
    let results = engine.search(query)?;
    let duration = start.elapsed();

    println!("Search found {} documents in {:?}", results.len(), duration);
    print_results(&results, json)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("Starting rsrank (TF-IDF ranked retrieval)");

    let start = Instant::now();
    let docs = load_directory(&args.path)?;
    println!("Loaded {} documents in {:?}", docs.len(), start.elapsed());

    let start = Instant::now();
    let engine = SearchEngine::build(&docs);
    let stats = engine.stats();
    println!(
        "Indexed {} documents ({} distinct terms) in {:?}",
        stats.total_documents,
        stats.total_terms,
        start.elapsed()
    );

    if let Some(query) = args.query {
        println!();
        println!("Searching for: \"{}\"", query);
        return do_search(&engine, &query, args.json);
    }

    // Interactive loop: one query per line, "exit" quits.
    println!("Enter a query, or \"exit\" to quit");
    let stdin = io::stdin();
    loop {
        print!("query> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("exit") {
            break;
        }

        do_search(&engine, query, args.json)?;
        println!();
    }

    Ok(())
}
