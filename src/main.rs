//! tagdoc — convert `@tag`-annotated docstrings into numpydoc sections.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `tagdoc -k method < doc.txt`
//! - **file mode**: `tagdoc -k class -o out docs/*.txt`

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tagdoc::render::{self, Renderer};
use tagdoc::{EntityKind, RawDocstring};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tagdoc",
    about = "Convert @tag-annotated docstrings into numpydoc-style sections"
)]
struct Cli {
    /// Input files or glob patterns, one docstring per file.
    /// If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// What the docstring documents: module, class, method, object.
    /// Any other kind passes the docstring through unchanged.
    #[arg(short = 'k', long, default_value = "method")]
    kind: String,

    /// Output format: numpy (default), json
    #[arg(short = 'f', long, default_value = "numpy")]
    format: String,

    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let kind = EntityKind::from(cli.kind.as_str());
    let renderer = render::create_renderer(&cli.format)?;

    if cli.files.is_empty() {
        return stdin_mode(renderer.as_ref(), &kind);
    }

    file_mode(&cli, renderer.as_ref(), &kind)
}

/// stdin mode: read one docstring from stdin, write the result to stdout.
fn stdin_mode(renderer: &dyn Renderer, kind: &EntityKind) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let raw = RawDocstring::from_text(&input);
    print!("{}", renderer.render(&raw, kind)?);
    Ok(())
}

/// file mode: convert each file, write `<stem>.<ext>` into the output directory.
fn file_mode(cli: &Cli, renderer: &dyn Renderer, kind: &EntityKind) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let raw = RawDocstring::from_text(&content);
        let rendered = renderer.render(&raw, kind)?;

        let out_path = output_dir.join(format!("{}.{}", derive_output_name(path), ext));
        fs::write(&out_path, &rendered)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!(input = %path.display(), output = %out_path.display(), "Wrote docstring");
    }

    Ok(())
}

/// Resolve each argument as a literal path or a glob pattern.
/// The result is sorted and free of duplicates.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if Path::new(pattern).is_file() {
            files.push(PathBuf::from(pattern));
            continue;
        }
        let before = files.len();
        for entry in glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
        {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!(pattern = %pattern, error = %e, "Unreadable glob match"),
            }
        }
        if files.len() == before {
            tracing::warn!(pattern = %pattern, "No files matched");
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "docs/i18n.txt" → "i18n"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "docstring".to_string())
}
