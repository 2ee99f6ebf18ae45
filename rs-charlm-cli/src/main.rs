use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;
use rs_charlm_core::LanguageModel;

mod settings;

use settings::Settings;

/// Random source selection for generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
	/// Unpredictable output, seeded by the operating system
	Random,
	/// Reproducible output, seeded with the configured fixed seed
	Fixed,
}

/// Trains a character-level sliding-window model on a corpus and prints
/// generated text.
#[derive(Parser, Debug)]
#[command(name = "rs-charlm")]
#[command(about = "Character-level sliding-window text generator")]
struct Cli {
	/// Number of characters in a context window
	window_length: usize,

	/// Text to start generating from (its last WINDOW_LENGTH characters
	/// must appear in the corpus)
	seed_text: String,

	/// Total length of the generated text, seed included
	length: usize,

	/// `random` or `fixed`
	#[arg(value_enum)]
	mode: Mode,

	/// Corpus file (UTF-8 text)
	corpus: PathBuf,

	/// Seed used in `fixed` mode (overrides the settings file)
	#[arg(long)]
	seed: Option<u64>,

	/// Print every window and its distribution before the generated text
	#[arg(long)]
	dump: bool,

	/// TOML settings file
	#[arg(short, long)]
	config: Option<PathBuf>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	let settings = Settings::load(cli.config.as_deref())?;

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.logging.filter.as_str())).init();

	let seed = match cli.mode {
		Mode::Random => None,
		Mode::Fixed => Some(cli.seed.unwrap_or(settings.generation.fixed_seed)),
	};
	debug!("window_length={} mode={:?} seed={:?}", cli.window_length, cli.mode, seed);

	let mut model = LanguageModel::new(cli.window_length, seed)?;
	model
		.train_file(&cli.corpus)
		.with_context(|| format!("failed to train on {}", cli.corpus.display()))?;

	if cli.dump {
		print!("{}", model);
	}

	let generation = model.generate_with_outcome(&cli.seed_text, cli.length);
	debug!("generation stopped: {:?}", generation.termination);
	println!("{}", generation.text);

	Ok(())
}
