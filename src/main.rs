use std::fs;
use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use glint::{
    CheckpointSet, Range, ScopeRegistry, StringInput, highlight, languages, render, theme_by_name,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to highlight
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Language name (detected from the file extension by default)
    #[arg(short, long)]
    language: Option<String>,

    /// Color theme
    #[arg(short, long, default_value = "one-dark")]
    theme: String,

    /// Highlight in windows of roughly this many bytes, carrying
    /// checkpoints from one window into the next
    #[arg(long, value_name = "BYTES")]
    chunk: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let mut registry = ScopeRegistry::new();
    languages::register_all(&mut registry);

    let name = match args.language {
        Some(name) => name,
        None => languages::scope_for_path(&args.file)
            .with_context(|| format!("cannot detect a language for {}", args.file.display()))?
            .to_string(),
    };
    let scope = registry.get(&name).with_context(|| {
        format!(
            "unknown language {name:?} (available: {})",
            registry.sorted_names().join(", ")
        )
    })?;

    let theme =
        theme_by_name(&args.theme).with_context(|| format!("unknown theme {:?}", args.theme))?;

    let mut input = StringInput::new(&text);
    let mut checkpoints = CheckpointSet::new();

    let mut out = stdout();
    render::set_background(&mut out, theme)?;

    match args.chunk {
        None => {
            let spans = highlight(scope, &mut input, &mut checkpoints, Range::new(0, text.len()));
            render::print_spans(&mut out, theme, &text, &spans)?;
        }
        Some(0) => bail!("chunk size must be at least 1"),
        Some(chunk) => {
            let mut start = 0;
            while start < text.len() {
                let mut end = (start + chunk).min(text.len());
                // window edges must fall between characters
                while !text.is_char_boundary(end) {
                    end += 1;
                }
                let spans = highlight(scope, &mut input, &mut checkpoints, Range::new(start, end));
                render::print_spans(&mut out, theme, &text, &spans)?;
                start = end;
            }
        }
    }

    render::reset(&mut out)?;
    Ok(())
}
