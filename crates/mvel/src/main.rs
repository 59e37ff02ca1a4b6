use std::fmt::Write as _;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser};
use mvel_errors::Renderer;
use mvel_parse::Limits;
use mvel_syntax::SyntaxNode;
use mvel_tokenizer::Tokenizer;
use text_size::{TextRange, TextSize};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(version, about = "Inspect MVEL expressions and templates")]
enum Options {
    /// Print every token with its range.
    Tokens { path: Utf8PathBuf },
    /// Print the syntax tree.
    Parse {
        path: Utf8PathBuf,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Report malformed input; exits with an error if any was found.
    Check {
        path: Utf8PathBuf,
        #[command(flatten)]
        limits: LimitArgs,
    },
}

#[derive(Args)]
struct LimitArgs {
    /// Maximum nesting depth.
    #[arg(long)]
    max_depth: Option<u32>,
    /// Maximum iterations of list-like loops; other loop ceilings scale with it.
    #[arg(long)]
    max_iterations: Option<u32>,
}

impl LimitArgs {
    fn limits(&self) -> Limits {
        let defaults = Limits::default();
        Limits::new(
            self.max_depth.unwrap_or(defaults.max_depth),
            self.max_iterations.unwrap_or(defaults.max_iterations),
        )
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match Options::parse() {
        Options::Tokens { path } => {
            let text = read(&path)?;
            let mut out = String::new();

            for token in Tokenizer::new(&text) {
                let slice = &text[token.range];
                writeln!(out, "{:?}@{:?} {slice:?}", token.kind, token.range)?;
            }

            print!("{out}");
            Ok(())
        }
        Options::Parse { path, limits } => {
            let text = read(&path)?;
            let root = parse(&text, limits.limits());

            print!("{}", root.debug(&text));
            Ok(())
        }
        Options::Check { path, limits } => {
            let text = read(&path)?;
            let root = parse(&text, limits.limits());

            let renderer = Renderer::styled();
            let diagnostics = mvel_errors::collect(&root, &text);

            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic.render(&renderer, path.as_str(), &text));
            }

            if !diagnostics.is_empty() {
                anyhow::bail!("found {} problem(s) in `{path}`", diagnostics.len());
            }

            Ok(())
        }
    }
}

fn read(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))
}

fn parse(text: &str, limits: Limits) -> SyntaxNode {
    let window = TextRange::up_to(TextSize::of(text));
    tracing::debug!(len = u32::from(window.len()), ?limits, "parsing");
    mvel_parse::parse_with(text, window, limits)
}
