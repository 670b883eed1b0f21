use rsrank::{Document, SearchEngine};

fn main() -> anyhow::Result<()> {
    println!("=== RSRANK Basic Usage Example ===\n");

    // Build an engine from a small in-memory corpus
    let documents = vec![
        Document::new(
            "rust.txt".to_string(),
            "Rust is a systems programming language that runs blazingly fast, \
             prevents segfaults, and guarantees thread safety."
                .to_string(),
        ),
        Document::new(
            "go.txt".to_string(),
            "Go is an open source programming language that makes it easy to \
             build simple, reliable, and efficient software."
                .to_string(),
        ),
        Document::new(
            "python.txt".to_string(),
            "Python is a programming language that lets you work quickly and \
             integrate systems more effectively."
                .to_string(),
        ),
    ];

    let engine = SearchEngine::build(&documents);
    println!("Indexed {} documents\n", documents.len());

    // Example 1: Ranked query
    println!("--- Example 1: Search for 'fast systems language' ---");
    let results = engine.search("fast systems language")?;
    for (i, result) in results.iter().enumerate() {
        println!("{}. [Score: {:.4}] {}", i + 1, result.score, result.doc_id);
    }

    // Example 2: A term present in every document contributes nothing
    println!("\n--- Example 2: Search for 'programming' (ubiquitous) ---");
    let results = engine.search("programming")?;
    println!("Found {} documents (idf of a universal term is zero)", results.len());

    // Example 3: Unknown terms match nothing
    println!("\n--- Example 3: Search for 'zzz' ---");
    let results = engine.search("zzz")?;
    println!("Found {} documents", results.len());

    // Example 4: Index statistics
    println!("\n--- Example 4: Index Statistics ---");
    let stats = engine.stats();
    println!("Total documents: {}", stats.total_documents);
    println!("Distinct terms: {}", stats.total_terms);
    println!("Average docs per term: {:.2}", stats.avg_docs_per_term);

    println!("\n=== Example Complete ===");

    Ok(())
}
