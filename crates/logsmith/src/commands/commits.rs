//! Commits command.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use logsmith_commit::{ParsedCommit, ReferenceKind};
use logsmith_config::Config;
use logsmith_core::{CommitFilter, Pipeline, resolve_range};
use logsmith_git::Repository;
use logsmith_parser_conventional::{ConventionalParser, ScopeAliasTable};
use tracing::info;

use super::load_config_or_default;

/// Output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per commit
    #[default]
    Text,
    /// JSON array of parsed commits
    Json,
}

/// Arguments for the commits command.
#[derive(Debug, Args)]
pub struct CommitsArgs {
    /// Start of the range (default: previous tag, then the root commit)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the range (default: tag at HEAD, then the current branch)
    #[arg(long)]
    pub to: Option<String>,

    /// Read raw log text from a file ("-" for stdin) instead of git
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Keep every conventional commit, ignoring type and release filters
    #[arg(short, long)]
    pub all: bool,
}

/// Runs the commits command.
pub fn run(args: &CommitsArgs, dir: &Path) -> Result<()> {
    let config = load_config_or_default(dir)?;

    let text = match &args.input {
        Some(path) => read_input(path)?,
        None => read_history(args, &config, dir)?,
    };

    let parser = ConventionalParser::with_scope_map(ScopeAliasTable::from(config.scope_map.clone()));
    let pipeline = Pipeline::new(Box::new(parser));
    let mut commits = pipeline.parse_log(&text);

    if !args.all {
        commits = CommitFilter::from_config(&config).apply(commits);
    }

    info!(count = commits.len(), "selected commits");

    let output = match args.format {
        OutputFormat::Text => render_text(&commits),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&commits).context("failed to serialize commits")?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Reads raw log text from a file or stdin.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("failed to read stdin");
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Renders the configured range of the repository as raw log text.
fn read_history(args: &CommitsArgs, config: &Config, dir: &Path) -> Result<String> {
    let repo = Repository::discover(dir).context("failed to open git repository")?;

    if config.require_clean && !repo.is_clean().context("failed to read repository status")? {
        bail!("working tree is not clean; commit or stash your changes first");
    }

    let from = args.from.as_deref().or(config.range.from.as_deref());
    let to = args.to.as_deref().or(config.range.to.as_deref());
    let range = resolve_range(&repo, from, to).context("failed to resolve commit range")?;
    info!(%range, "reading history");

    repo.log_text(range.from.as_deref(), &range.to)
        .context("failed to read git history")
}

/// Renders one line per commit:
/// `<hash> <type>(<scope>)!: <description> [refs] (authors)`.
fn render_text(commits: &[ParsedCommit]) -> String {
    let mut out = String::new();

    for commit in commits {
        if !out.is_empty() {
            out.push('\n');
        }

        let _ = write!(out, "{} {}", commit.short_hash, commit.r#type);
        if commit.has_scope() {
            let _ = write!(out, "({})", commit.scope);
        }
        if commit.is_breaking {
            out.push('!');
        }
        let _ = write!(out, ": {}", commit.description);

        let references: Vec<_> = commit
            .references
            .iter()
            .filter(|r| r.kind != ReferenceKind::Hash)
            .map(|r| r.value.as_str())
            .collect();
        if !references.is_empty() {
            let _ = write!(out, " [{}]", references.join(", "));
        }

        let authors: Vec<_> = commit.authors.iter().map(|a| a.name.as_str()).collect();
        let _ = write!(out, " ({})", authors.join(", "));
    }

    out
}
