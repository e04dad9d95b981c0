use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use zombie::config::{RuleBook, load_rule_book};
use zombie::logging::{self, LogLevel};
use zombie::rules::{Message, find_match, raise, shadowed_rules};
use zombie::{Exception, ZombieError};

const RULE_FILE: &str = "zombie.toml";

const INIT_TEMPLATE: &str = r#"# zombie rule file
#
# Kinds form a hierarchy: a rule for a kind also catches its descendants.
# Parents must be declared before their children.

[[kinds]]
name = "Error"

[[kinds]]
name = "LookupError"
parent = "Error"

[[kinds]]
name = "KeyError"
parent = "LookupError"

[[kinds]]
name = "ValueError"
parent = "Error"

# Rules are tried in order; the first whose `original` kind matches wins.
# `message` is used verbatim, `template` may reference ${original_error_message}.
# Without either, the original message is kept.
# `chain = true` records the original error as the direct cause.

[[rules]]
original = "KeyError"
new = "ValueError"
template = "Error: ${original_error_message}"
chain = true
"#;

#[derive(Parser)]
#[command(name = "zombie")]
#[command(
	author,
	version,
	about = "Check and dry-run error transformation rule files"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Create a template zombie.toml in the current directory
	Init {
		/// Overwrite an existing zombie.toml
		#[arg(long)]
		force: bool,
	},
	/// Check a rule file for errors, unknown placeholders and shadowed rules
	Check {
		/// Rule file to check
		#[arg(value_name = "FILE", default_value = RULE_FILE)]
		file: PathBuf,
	},
	/// Display the kinds and rules declared in a rule file
	Show {
		/// Rule file to display
		#[arg(value_name = "FILE", default_value = RULE_FILE)]
		file: PathBuf,
	},
	/// Raise an error of the given kind through a rule file and report the result
	Explain {
		/// Rule file to apply
		#[arg(value_name = "FILE", default_value = RULE_FILE)]
		file: PathBuf,

		/// Kind of the error to raise
		#[arg(long)]
		kind: String,

		/// Message of the error to raise
		#[arg(long, default_value = "")]
		message: String,
	},
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	logging::init(LogLevel::from(cli.verbose));

	match run(cli.command) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(command: Commands) -> Result<ExitCode> {
	match command {
		Commands::Init { force } => handle_init(force),
		Commands::Check { file } => handle_check(&file),
		Commands::Show { file } => handle_show(&file),
		Commands::Explain {
			file,
			kind,
			message,
		} => handle_explain(&file, &kind, &message),
	}
}

fn load(file: &Path) -> Result<RuleBook> {
	load_rule_book(file).with_context(|| format!("Failed to load rule file {}", file.display()))
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let path = PathBuf::from(RULE_FILE);

	if path.exists() && !force {
		anyhow::bail!("{RULE_FILE} already exists. Use --force to overwrite.");
	}

	std::fs::write(&path, INIT_TEMPLATE)
		.with_context(|| format!("Failed to write {}", path.display()))?;

	println!("Created {RULE_FILE}");
	Ok(ExitCode::SUCCESS)
}

fn handle_check(file: &Path) -> Result<ExitCode> {
	let book = match load(file) {
		Ok(book) => book,
		Err(e) => {
			eprintln!("Rule file error: {e:#}");
			return Ok(ExitCode::FAILURE);
		}
	};

	let mut valid = true;
	for (i, rule) in book.rules.iter().enumerate() {
		if let Message::Template(template) = rule.message()
			&& let Err(e) = template.validate()
		{
			eprintln!("Rule {}: template {:?}: {}", i + 1, template.as_str(), e);
			valid = false;
		}
	}

	for shadowing in shadowed_rules(&book.rules) {
		eprintln!(
			"Warning: rule {} is shadowed by rule {} and can never match",
			shadowing.index + 1,
			shadowing.shadowed_by + 1
		);
	}

	if !valid {
		return Ok(ExitCode::FAILURE);
	}

	println!(
		"{} is valid: {} kinds, {} rules",
		file.display(),
		book.kinds.len(),
		book.rules.len()
	);
	Ok(ExitCode::SUCCESS)
}

fn handle_show(file: &Path) -> Result<ExitCode> {
	let book = load(file)?;

	println!("# Source: {}", book.source.display());
	println!("# kinds: {}", book.kinds.len());
	println!("# rules: {}", book.rules.len());
	println!();

	println!("Kinds:");
	for kind in book.kinds.kinds() {
		match kind.parent() {
			Some(parent) => println!("  {} < {}", kind, parent),
			None => println!("  {}", kind),
		}
		if !kind.takes_message() {
			println!("    takes_message: false");
		}
	}
	println!();

	for (i, rule) in book.rules.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		println!("    original: {}", rule.original_kind());
		println!("    new: {}", rule.new_kind());
		match rule.message() {
			Message::Original => {}
			Message::Literal(text) => println!("    message: {}", text),
			Message::Template(template) => println!("    template: {}", template),
		}
		println!("    chain: {}", rule.chain_cause());
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_explain(file: &Path, kind: &str, message: &str) -> Result<ExitCode> {
	let book = load(file)?;
	let kind = book
		.kinds
		.resolve(kind)
		.with_context(|| format!("Cannot raise kind {kind}"))?;
	let caught = Exception::new(&kind, message);

	let matched = find_match(&caught, &book.rules);
	match matched {
		Some(rule) => {
			let index = book
				.rules
				.iter()
				.position(|r| std::ptr::eq(r, rule))
				.unwrap_or_default();
			println!("Matched rule {}: {}", index + 1, rule);
		}
		None => println!("No rule matched"),
	}
	println!();

	match raise(matched, caught) {
		ZombieError::Raised(raised) => {
			println!("{}", raised.report());
			Ok(ExitCode::SUCCESS)
		}
		other => Err(other).context("Failed to build the replacement error"),
	}
}
