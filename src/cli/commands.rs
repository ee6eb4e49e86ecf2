// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and all their configurable flags:
//
//   serve        run the web front-end
//   digest       digest one text (URL or local file)
//   analyze      statistics for raw text
//   ngrams       n-gram frequency table for a local file,
//                or a table saved by an earlier run
//   init-config  write a default config file
//
// Flags that mirror config-file settings are Options: when
// given they override the file, otherwise the file (or the
// built-in default) wins.
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};

use crate::infra::config::{ServiceConfig, DEFAULT_CONFIG_FILE};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the web interface and JSON API
    Serve(ServeArgs),

    /// Fetch (or read) one text and print its digest
    Digest(DigestArgs),

    /// Print statistics for raw text
    Analyze(AnalyzeArgs),

    /// Count n-grams in a local text file (or reload a saved table)
    Ngrams(NgramsArgs),

    /// Write the default configuration to a JSON file
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// JSON config file (see `init-config`)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Interface to bind, e.g. 0.0.0.0
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Download timeout in seconds
    #[arg(long)]
    pub fetch_timeout_secs: Option<u64>,
}

impl ServeArgs {
    /// Apply the flags on top of a loaded config
    pub fn apply(&self, cfg: &mut ServiceConfig) {
        if let Some(host) = &self.host {
            cfg.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(secs) = self.fetch_timeout_secs {
            cfg.fetch_timeout_secs = secs;
        }
    }
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["url", "file"])))]
pub struct DigestArgs {
    /// URL of a plain-text Gutenberg book
    #[arg(long)]
    pub url: Option<String>,

    /// Local .txt file instead of a URL
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Preview length in characters
    #[arg(long)]
    pub preview_len: Option<usize>,

    /// Number of sentences in the summary
    #[arg(long)]
    pub summary_sentences: Option<usize>,

    /// Print JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(long)]
    pub text: Option<String>,

    /// File whose contents to analyze
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// JSON config file (markers and terminators)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "load"])))]
pub struct NgramsArgs {
    /// Local text file to count
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Count table saved earlier with `--out`, instead of a text file
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// N-gram size (1 = words, 2 = word pairs, ...)
    #[arg(long, default_value_t = 2)]
    pub n: usize,

    /// How many of the most frequent n-grams to print
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Additive smoothing used for probabilities
    #[arg(long, default_value_t = 0.0)]
    pub smoothing: f64,

    /// Save the full count table to this JSON file
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Save probabilities instead of raw counts
    #[arg(long)]
    pub probabilities: bool,

    /// JSON config file (markers and terminators)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub out: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
