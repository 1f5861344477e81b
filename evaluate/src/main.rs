mod gold;
mod pipeline;
mod report;

use std::fs::File;
use std::io::{prelude::*, stdout, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};
use papyeval::{write_fixture, CannedTagger, PapyevalError, Sentence, SqliteCorpus};

use crate::pipeline::Evaluator;
use crate::report::Report;

#[derive(Parser, Debug)]
#[command(
    name = "evaluate",
    about = "A program to evaluate a part-of-speech tagger against a papyrological corpus.",
    group = ArgGroup::new("gold").required(true)
)]
struct Args {
    /// An evaluation fixture: one JSON object {"id", "tokens", "pos_tags"} per line
    #[arg(long, group = "gold")]
    fixture: Option<PathBuf>,

    /// An SQLite corpus database; every annotated text is evaluated
    #[arg(long, group = "gold")]
    database: Option<PathBuf>,

    /// Predictions of the tagger: one JSON object {"sentence", "labels"} per line
    #[arg(long)]
    predictions: PathBuf,

    /// Also write the gold sentences to this file in the fixture format
    #[arg(long)]
    dump_gold: Option<PathBuf>,

    /// The number of most frequent mismatches to report
    #[arg(long, default_value = "100")]
    top: usize,

    /// Do not color the report.
    #[arg(long)]
    no_color: bool,
}

fn load_gold(args: &Args) -> papyeval::Result<Vec<Sentence>> {
    if let Some(path) = &args.fixture {
        log::info!("Loading fixture...");
        return gold::from_fixture(gold::open_reader(path)?);
    }
    let Some(path) = &args.database else {
        return Ok(vec![]);
    };
    log::info!("Loading corpus...");
    let corpus = SqliteCorpus::open(path)?;
    gold::from_corpus(&corpus)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sentences = match load_gold(&args) {
        Ok(sentences) => sentences,
        Err(PapyevalError::Corpus(e)) => {
            log::error!(
                "Error in {}: {} \n Sql: {} \n Params: {}",
                e.operation,
                e.msg,
                e.sql.trim(),
                e.params
            );
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    log::info!("{} gold sentences", sentences.len());

    if let Some(path) = &args.dump_gold {
        let mut wtr = BufWriter::new(File::create(path)?);
        write_fixture(&mut wtr, &sentences)?;
        wtr.flush()?;
    }

    log::info!("Loading predictions...");
    let tagger = CannedTagger::read(gold::open_reader(&args.predictions)?)?;

    let mut evaluator = Evaluator::new(tagger);
    let report = Report::new(!args.no_color);
    let mut out = stdout().lock();
    for sentence in &sentences {
        let comparisons = evaluator.evaluate(sentence)?;
        let scorer = evaluator.scorer();
        writeln!(out, "{}\n", report.comparisons(&comparisons))?;
        writeln!(out, "{}\n", report.totals(scorer.totals()))?;
        writeln!(out, "{}\n", report.mismatches(&scorer.top_mismatches(args.top)))?;
    }

    Ok(())
}
