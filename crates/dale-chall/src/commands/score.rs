//! Score command — Dale-Chall readability scoring.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use dale_chall_core::{Config, DaleChallReport, readability};

use super::{LexiconPaths, read_input_file};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Familiar word list (JSON array or one word per line).
    #[arg(long, value_name = "FILE")]
    pub corpus: Option<Utf8PathBuf>,

    /// Dictionary word list used to spot proper nouns.
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<Utf8PathBuf>,

    /// Write the full result as JSON to this file.
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<Utf8PathBuf>,

    /// Maximum acceptable Dale-Chall score.
    #[arg(long)]
    pub max_score: Option<f64>,
}

/// JSON output: the report plus the gate outcome when a limit is set.
#[derive(Serialize)]
struct ScoreOutput<'a> {
    #[serde(flatten)]
    report: &'a DaleChallReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    over_max: Option<bool>,
}

/// Score readability of a file using the Dale-Chall formula.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_score = ?args.max_score, "executing score command");

    let paths = LexiconPaths::resolve(
        args.corpus.as_deref(),
        args.dictionary.as_deref(),
        config,
        cwd,
    )?;
    debug!(corpus = %paths.corpus, dictionary = %paths.dictionary, "word lists resolved");
    let lexicon = paths.load()?;
    debug!(
        familiar = lexicon.familiar_len(),
        dictionary = lexicon.dictionary_len(),
        "word lists loaded"
    );

    let content = read_input_file(&args.file, config.input_limit())?;
    let report = readability::check_readability(&content, &lexicon)
        .with_context(|| format!("failed to score {}", args.file))?;

    if let Some(ref export) = args.export {
        export_report(&report, export)?;
        debug!(export = %export, "report exported");
    }

    let max_score = args.max_score.or(config.max_score);
    let over_max = max_score.is_some_and(|max| report.score() > max);

    if global_json {
        let output = ScoreOutput {
            report: &report,
            max_score,
            over_max: max_score.map(|_| over_max),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&args.file, &report);
    }

    if let Some(max) = max_score {
        if over_max {
            bail!(
                "{} scores {:.2} (max: {:.2}). Use shorter sentences or more familiar words.",
                args.file,
                report.score(),
                max,
            );
        }
        if !global_json {
            println!(
                "{} {} scores {:.2} (max: {:.2})",
                "PASS:".green(),
                args.file,
                report.score(),
                max,
            );
        }
    }

    Ok(())
}

fn print_summary(file: &Utf8Path, report: &DaleChallReport) {
    let stats = &report.stats;
    println!("{}", file.bold());
    println!("{}: {}", "Sentences".dimmed(), stats.sentence_count);
    println!("{}: {}", "Words".dimmed(), stats.word_count);
    println!(
        "{}: {} ({:.1}%)",
        "Difficult words".dimmed(),
        stats.difficult_words,
        stats.difficult_word_percentage,
    );
    println!(
        "{}: {:.1}",
        "Average sentence length".dimmed(),
        stats.average_sentence_length,
    );
    println!("{}: {:.2}", "Raw score".dimmed(), stats.raw_score.cyan());
    println!("{}: {}", "Reading level".dimmed(), report.grade_band());
}

/// Write the report as JSON with four-space indentation.
fn export_report(report: &DaleChallReport, path: &Utf8Path) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut serializer)?;
    buf.push(b'\n');
    std::fs::write(path.as_std_path(), buf)
        .with_context(|| format!("failed to write {path}"))?;
    Ok(())
}
