//! aprender-sentiment CLI: Naive Bayes review classification with k-fold
//! cross-validation.

use aprender_sentiment::{
    classification::MultinomialNB,
    config::{OutputFormat, RunConfig, DEFAULT_FOLDS},
    corpus::{load_corpus_dir, load_fold_indices, write_fold_indices, Corpus},
    model_selection::{cross_validate, FoldPartition},
    report,
    text::{StopWordsFilter, VocabularyBuilder},
    Result, SentimentError,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "aprender-sentiment")]
#[command(about = "Naive Bayes sentiment classification of movie reviews")]
#[command(version)]
struct Cli {
    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "APRENDER_SENTIMENT_LOG", default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cross-validate the classifier and report per-fold accuracy
    CrossValidate {
        /// Corpus directory containing pos/ and neg/
        #[arg(short, long)]
        corpus: PathBuf,

        /// Stop-word file, one word per line
        #[arg(short, long)]
        stop_words: PathBuf,

        /// Training index file, one fold per line
        #[arg(long, requires = "test_index")]
        train_index: Option<PathBuf>,

        /// Test index file, one fold per line
        #[arg(long, requires = "train_index")]
        test_index: Option<PathBuf>,

        /// Number of folds
        #[arg(short = 'k', long, default_value_t = DEFAULT_FOLDS)]
        folds: usize,

        /// Shuffle seed for generated folds
        #[arg(long, conflicts_with = "train_index")]
        seed: Option<u64>,

        /// Split generated folds without preserving class balance
        #[arg(long, conflicts_with = "train_index")]
        no_stratify: bool,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate fold index files for a corpus
    Folds {
        /// Corpus directory containing pos/ and neg/
        #[arg(short, long)]
        corpus: PathBuf,

        /// Number of folds
        #[arg(short = 'k', long, default_value_t = DEFAULT_FOLDS)]
        folds: usize,

        /// Shuffle seed
        #[arg(long)]
        seed: Option<u64>,

        /// Split without preserving class balance
        #[arg(long)]
        no_stratify: bool,

        /// Output training index file
        #[arg(long, default_value = "train_indices.txt")]
        train_out: PathBuf,

        /// Output test index file
        #[arg(long, default_value = "test_indices.txt")]
        test_out: PathBuf,
    },

    /// Train on the whole corpus and classify the given texts
    Predict {
        /// Corpus directory containing pos/ and neg/
        #[arg(short, long)]
        corpus: PathBuf,

        /// Stop-word file, one word per line
        #[arg(short, long)]
        stop_words: PathBuf,

        /// Texts to classify
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let result = match cli.command {
        Commands::CrossValidate {
            corpus,
            stop_words,
            train_index,
            test_index,
            folds,
            seed,
            no_stratify,
            format,
        } => {
            let config = RunConfig::new(folds)
                .with_seed(seed)
                .with_stratified(!no_stratify)
                .with_format(format);
            let index_files = train_index.zip(test_index);
            cmd_cross_validate(&corpus, &stop_words, index_files, &config)
        }
        Commands::Folds {
            corpus,
            folds,
            seed,
            no_stratify,
            train_out,
            test_out,
        } => {
            let config = RunConfig::new(folds)
                .with_seed(seed)
                .with_stratified(!no_stratify);
            cmd_folds(&corpus, &config, &train_out, &test_out)
        }
        Commands::Predict {
            corpus,
            stop_words,
            texts,
        } => cmd_predict(&corpus, &stop_words, &texts),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(if e.is_input_error() { 2 } else { 1 });
    }
}

fn init_logging(level: tracing::Level) {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging already initialized");
    }
}

fn fold_partitions(
    corpus: &Corpus,
    index_files: Option<(PathBuf, PathBuf)>,
    config: &RunConfig,
) -> Result<Vec<FoldPartition>> {
    match index_files {
        Some((train, test)) => load_fold_indices(&train, &test, config.folds),
        None => {
            tracing::info!(
                folds = config.folds,
                seed = ?config.seed,
                stratified = config.stratified,
                "generating folds"
            );
            config.kfold().split(corpus.labels())
        }
    }
}

fn cmd_cross_validate(
    corpus_dir: &Path,
    stop_words_path: &Path,
    index_files: Option<(PathBuf, PathBuf)>,
    config: &RunConfig,
) -> Result<()> {
    config.validate()?;
    let corpus = load_corpus_dir(corpus_dir)?;
    let stop_words = StopWordsFilter::load(stop_words_path)?;
    let partitions = fold_partitions(&corpus, index_files, config)?;
    let builder = VocabularyBuilder::new(&stop_words);

    match config.format {
        OutputFormat::Text => {
            let result = cross_validate(&corpus, &builder, &partitions, |fold| {
                println!("{}", report::fold_line(fold));
            })?;
            println!("{}", report::summary_line(&result));
        }
        OutputFormat::Json => {
            let result = cross_validate(&corpus, &builder, &partitions, |_| {})?;
            println!("{}", report::to_json(&result)?);
        }
    }
    Ok(())
}

fn cmd_folds(corpus_dir: &Path, config: &RunConfig, train_out: &Path, test_out: &Path) -> Result<()> {
    config.validate()?;
    let corpus = load_corpus_dir(corpus_dir)?;
    let partitions = config.kfold().split(corpus.labels())?;
    write_fold_indices(&partitions, train_out, test_out)?;

    println!(
        "Wrote {} folds over {} documents to {} and {}",
        partitions.len(),
        corpus.len(),
        train_out.display(),
        test_out.display()
    );
    Ok(())
}

fn cmd_predict(corpus_dir: &Path, stop_words_path: &Path, texts: &[String]) -> Result<()> {
    let corpus = load_corpus_dir(corpus_dir)?;
    if corpus.is_empty() {
        return Err(SentimentError::InvalidCorpus(format!(
            "{} contains no reviews",
            corpus_dir.display()
        )));
    }
    let stop_words = StopWordsFilter::load(stop_words_path)?;
    let builder = VocabularyBuilder::new(&stop_words);
    let model = MultinomialNB::fit(&builder, corpus.documents(), corpus.labels())?;

    for text in texts {
        let scores = model.scores(&builder, text);
        println!(
            "{}\tpositive={:.4}\tnegative={:.4}",
            scores.prediction(),
            scores.positive,
            scores.negative
        );
    }
    Ok(())
}
