//! profile-ir - rank a corpus of text files against user interest profiles

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use profile_ir::{
    config::{RankConfig, DEFAULT_SCORE_MULTIPLIER, DEFAULT_SCORE_THRESHOLD},
    error::ExitCode as IrExitCode,
    loader, logging, presenter, Error, Recommender, SimilarityAlgorithm, Vocabulary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scoring {
    /// plain cosine similarity
    Cosine,
    /// cosine scaled by the share of relevant words in the document
    Weighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "profile-ir", version, about = "Recommend documents for user interest profiles")]
struct Cli {
    /// Directory of .txt documents
    #[arg(long, env = "PROFILE_IR_CORPUS", default_value = "corpus")]
    corpus: PathBuf,

    /// Profiles file, one `UserID#interest1#interest2` per line
    #[arg(long, env = "PROFILE_IR_PROFILES", default_value = "profiles")]
    profiles: PathBuf,

    /// Dictionary file, one `term#similar1#similar2` per line
    /// (bundled reference dictionary when omitted)
    #[arg(long, env = "PROFILE_IR_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Hide documents scoring below this value
    #[arg(long, default_value_t = DEFAULT_SCORE_THRESHOLD)]
    threshold: f64,

    #[arg(long, value_enum, default_value_t = Scoring::Weighted)]
    scoring: Scoring,

    /// Scale factor of weighted scoring
    #[arg(long, default_value_t = DEFAULT_SCORE_MULTIPLIER)]
    multiplier: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print the per-document term counts before the recommendations
    #[arg(long)]
    show_frequencies: bool,

    /// Shorthand for --log-level debug
    #[arg(short, long)]
    verbose: bool,

    /// Log filter, e.g. `trace` or `profile_ir=debug`
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn rank_config(&self) -> RankConfig {
        let algorithm = match self.scoring {
            Scoring::Cosine => SimilarityAlgorithm::CosineSimilarity,
            Scoring::Weighted => SimilarityAlgorithm::RelevanceWeighted {
                multiplier: self.multiplier,
            },
        };
        RankConfig {
            threshold: self.threshold,
            algorithm,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<IrExitCode, Error> {
    let start = Instant::now();

    let vocabulary = match &cli.dictionary {
        Some(path) => loader::load_dictionary(path)?,
        None => Vocabulary::reference()?,
    };
    let mut recommender = Recommender::new(vocabulary, cli.rank_config())?;

    let documents = loader::load_corpus(&cli.corpus)?;
    if documents.is_empty() {
        tracing::warn!(dir = %cli.corpus.display(), "no documents found");
    }
    recommender.add_docs(&documents);

    let profiles = loader::load_profiles(&cli.profiles)?;
    let outcomes = recommender.recommend_all(&profiles);
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();

    let mut out = String::new();
    match cli.format {
        OutputFormat::Json => {
            let json =
                presenter::render_json(recommender.vocabulary(), recommender.config(), &outcomes)?;
            out.push_str(&json);
            out.push('\n');
        }
        OutputFormat::Table => {
            if cli.show_frequencies {
                out.push_str(&presenter::render_frequencies(
                    recommender.vocabulary(),
                    recommender.corpus(),
                ));
            }
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(hits) => out.push_str(&presenter::render_profile(outcome.profile, hits)),
                    Err(e) => out.push_str(&presenter::render_failure(outcome.profile, e)),
                }
            }
            out.push_str(&presenter::render_footer(recommender.config()));
        }
    }
    io::stdout()
        .write_all(out.as_bytes())
        .map_err(|e| Error::Io { path: PathBuf::from("<stdout>"), source: e })?;

    tracing::debug!(
        profiles = profiles.len(),
        failed,
        elapsed = ?start.elapsed(),
        "run finished"
    );

    if failed > 0 {
        Ok(IrExitCode::Data)
    } else {
        Ok(IrExitCode::Success)
    }
}
