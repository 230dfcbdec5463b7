//! qa — answer questions from a directory of text files.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use tfidf_qa::{Answer, Corpus, IndexedCorpus, QueryEngine, RetrievalConfig};

#[derive(Parser)]
#[command(
    name = "qa",
    about = "Find the sentence in a text corpus that best answers a query",
    version
)]
struct Cli {
    /// Directory containing .txt documents
    corpus: PathBuf,

    /// Query to answer; prompts interactively when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// Number of top documents to draw sentences from
    #[arg(long)]
    files: Option<usize>,

    /// Number of sentences to print
    #[arg(long)]
    sentences: Option<usize>,

    /// TOML file with file_matches / sentence_matches
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print answers as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RetrievalConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RetrievalConfig::default(),
    };
    if let Some(n) = cli.files {
        config.file_matches = n;
    }
    if let Some(n) = cli.sentences {
        config.sentence_matches = n;
    }
    config.validate()?;

    let corpus = Corpus::load_dir(&cli.corpus)
        .with_context(|| format!("loading corpus {}", cli.corpus.display()))?;
    let engine = QueryEngine::new(config);
    let indexed = engine.index(corpus)?;

    match &cli.query {
        Some(query) => answer(&engine, &indexed, query, cli.json),
        None => interactive(&engine, &indexed, cli.json),
    }
}

fn interactive(engine: &QueryEngine, indexed: &IndexedCorpus, json: bool) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("Query: ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = editor.add_history_entry(line.as_str()) {
                    log::debug!("could not record history entry: {e}");
                }
                answer(engine, indexed, &line, json)?;
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}

fn answer(
    engine: &QueryEngine,
    indexed: &IndexedCorpus,
    query: &str,
    json: bool,
) -> anyhow::Result<()> {
    let answer = engine.answer(indexed, query)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print_answer(&answer);
    }
    Ok(())
}

fn print_answer(answer: &Answer) {
    if answer.sentences.is_empty() {
        println!("No matching sentence found.");
    }
    for sentence in &answer.sentences {
        println!("{sentence}");
    }
}
