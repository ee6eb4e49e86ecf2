// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands the work to Layer 2 (application) or to the
// web layer for `serve`.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use commands::{AnalyzeArgs, Commands, DigestArgs, InitConfigArgs, NgramsArgs, ServeArgs};

use crate::application::{analyze_use_case::AnalyzeUseCase, digest_use_case::DigestUseCase};
use crate::data::{
    frequency::{FrequencyAnalyzer, NGram},
    loader::{load_file, HttpTextSource},
    pipeline::TextPipeline,
    splitter::normalized_words,
};
use crate::domain::{digest::{Digest, DigestRequest}, stats::TextStats};
use crate::infra::{config::ServiceConfig, frequency_store};

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "gutenberg-digest",
    version,
    about = "Fetch a Project Gutenberg text, strip the boilerplate, and report statistics, a preview and a summary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)      => run_serve(args).await,
            Commands::Digest(args)     => run_digest(args).await,
            Commands::Analyze(args)    => run_analyze(args),
            Commands::Ngrams(args)     => run_ngrams(args),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut cfg = ServiceConfig::load_or_default(args.config.as_deref())?;
    args.apply(&mut cfg);
    crate::web::serve(cfg).await
}

async fn run_digest(args: DigestArgs) -> Result<()> {
    let cfg    = ServiceConfig::load_or_default(args.config.as_deref())?;
    let source = HttpTextSource::new(cfg.fetch_timeout(), &cfg.user_agent, cfg.max_body_bytes)?;
    let use_case = DigestUseCase::new(
        source,
        TextPipeline::new(cfg.pipeline.clone()),
        cfg.require_txt_extension,
    );

    let digest = match (&args.url, &args.file) {
        (Some(url), _) => {
            let mut request = DigestRequest::for_url(url.as_str());
            request.preview_len       = args.preview_len;
            request.summary_sentences = args.summary_sentences;
            use_case.execute(request).await?
        }
        (None, Some(path)) => {
            let raw = load_file(path)?;
            use_case.digest_document(
                &raw,
                args.preview_len.unwrap_or(cfg.pipeline.preview_len),
                args.summary_sentences.unwrap_or(cfg.pipeline.summary_sentences),
            )
        }
        (None, None) => bail!("Either --url or --file is required"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&digest)?);
    } else {
        print_digest(&digest);
    }
    Ok(())
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let text = match (args.text, &args.file) {
        (Some(text), _)    => text,
        (None, Some(path)) => load_file(path)?.text,
        (None, None)       => bail!("Either --text or --file is required"),
    };

    let stats = AnalyzeUseCase::new(pipeline_from(args.config.as_deref())?).analyze(&text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }
    Ok(())
}

fn run_ngrams(args: NgramsArgs) -> Result<()> {
    let analyzer = FrequencyAnalyzer::new();
    let counts   = ngram_counts(&args)?;

    for (gram, count) in analyzer.top(&counts, args.top) {
        println!("{:>8}  {}", count, gram.join(" "));
    }

    if let Some(out) = &args.out {
        if args.probabilities {
            let probs = analyzer.calculate_probabilities(&counts, args.smoothing);
            frequency_store::save(&probs, out)?;
        } else {
            frequency_store::save(&counts, out)?;
        }
        println!("Saved table to '{}'", out.display());
    }
    Ok(())
}

/// Count table for `ngrams`: read back from `--load`, or counted
/// over the cleaned words of `--file`.
fn ngram_counts(args: &NgramsArgs) -> Result<HashMap<NGram, usize>> {
    if let Some(path) = &args.load {
        let counts: HashMap<NGram, usize> = frequency_store::load(path)
            .context("--load expects a count table written by `ngrams --out`")?;
        tracing::info!("Loaded {} n-grams from '{}'", counts.len(), path.display());
        return Ok(counts);
    }

    let Some(path) = &args.file else {
        bail!("Either --file or --load is required");
    };
    if args.n == 0 {
        bail!("--n must be at least 1");
    }

    let pipeline = pipeline_from(args.config.as_deref())?;
    let raw      = load_file(path)?;
    let cleaned  = pipeline.clean(&raw.text);
    let tokens   = normalized_words(cleaned.as_str());

    let counts = FrequencyAnalyzer::new().calculate_ngrams(&tokens, args.n);
    tracing::info!("Counted {} distinct {}-grams over {} tokens", counts.len(), args.n, tokens.len());
    Ok(counts)
}

/// Pipeline built from the `pipeline` section of an optional config file
fn pipeline_from(config: Option<&Path>) -> Result<TextPipeline> {
    let cfg = ServiceConfig::load_or_default(config)?;
    Ok(TextPipeline::new(cfg.pipeline))
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    if args.out.exists() && !args.force {
        bail!("'{}' already exists (use --force to overwrite)", args.out.display());
    }
    ServiceConfig::default()
        .save(&args.out)
        .context("Cannot write default config")?;
    println!("Wrote default config to '{}'", args.out.display());
    Ok(())
}

fn print_stats(stats: &TextStats) {
    println!("Characters:              {}", stats.char_count);
    println!("Words:                   {}", stats.word_count);
    println!("Sentences:               {}", stats.sentence_count);
    println!("Average word length:     {:.2}", stats.avg_word_length);
    println!("Average sentence length: {:.2}", stats.avg_sentence_length);
    if !stats.most_common_words.is_empty() {
        let common: Vec<String> = stats
            .most_common_words
            .iter()
            .map(|wc| format!("{} ({})", wc.word, wc.count))
            .collect();
        println!("Most common words:       {}", common.join(", "));
    }
}

fn print_digest(digest: &Digest) {
    println!("Source: {}\n", digest.source);
    print_stats(&digest.stats);
    println!("\nSummary:\n{}", digest.summary.text());
    println!("\nPreview:\n{}", digest.preview);
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pipeline::PipelineConfig;

    fn ngrams_args() -> NgramsArgs {
        NgramsArgs {
            file:          None,
            load:          None,
            n:             2,
            top:           10,
            smoothing:     0.0,
            out:           None,
            probabilities: false,
            config:        None,
        }
    }

    #[test]
    fn test_pipeline_from_config_uses_custom_markers() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        let cfg  = ServiceConfig {
            pipeline: PipelineConfig {
                start_markers: vec!["BEGIN BOOK".into()],
                end_markers:   vec!["FINIS".into()],
                ..PipelineConfig::default()
            },
            ..ServiceConfig::default()
        };
        cfg.save(&path).unwrap();

        let stats = AnalyzeUseCase::new(pipeline_from(Some(path.as_path())).unwrap())
            .analyze("licence junk\nBEGIN BOOK\nOne two. Three.\nFINIS\nmore junk")
            .unwrap();
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.sentence_count, 2);
    }

    #[test]
    fn test_pipeline_from_no_config_is_default() {
        let pipeline = pipeline_from(None).unwrap();
        assert_eq!(pipeline.config(), &PipelineConfig::default());
    }

    #[test]
    fn test_ngram_counts_from_file_and_saved_table_agree() {
        let dir   = tempfile::tempdir().unwrap();
        let text  = dir.path().join("book.txt");
        let table = dir.path().join("bigrams.json");
        std::fs::write(&text, "The cat sat. The cat ran.").unwrap();

        let counted = ngram_counts(&NgramsArgs { file: Some(text), ..ngrams_args() }).unwrap();
        assert_eq!(counted.get(&vec!["the".to_string(), "cat".to_string()]), Some(&2));

        frequency_store::save(&counted, &table).unwrap();
        let loaded = ngram_counts(&NgramsArgs { load: Some(table), ..ngrams_args() }).unwrap();
        assert_eq!(loaded, counted);
    }

    #[test]
    fn test_ngram_counts_rejects_zero_n() {
        let dir  = tempfile::tempdir().unwrap();
        let text = dir.path().join("book.txt");
        std::fs::write(&text, "a b c").unwrap();
        assert!(ngram_counts(&NgramsArgs { file: Some(text), n: 0, ..ngrams_args() }).is_err());
    }

    #[test]
    fn test_ngram_counts_rejects_probability_table() {
        let dir   = tempfile::tempdir().unwrap();
        let table = dir.path().join("probs.json");
        std::fs::write(&table, r#"{"the||cat": 0.5}"#).unwrap();
        assert!(ngram_counts(&NgramsArgs { load: Some(table), ..ngrams_args() }).is_err());
    }
}
