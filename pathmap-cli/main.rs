use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use pathmap::{Bindings, PathMapper};

#[derive(Debug, clap::Parser)]
#[clap(version, about = "Match, extract and build paths from a path pattern")]
pub struct Args {
    /// The path pattern, e.g. `/pages/[...page].page.json`.
    pub pattern: String,
    #[clap(subcommand)]
    pub command: Command,
    #[clap(long, default_value = "text")]
    pub output_format: OutputChoice,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Check whether each path matches the pattern. Exits with status 1 if any
    /// of them does not.
    Test {
        #[clap(required = true)]
        paths: Vec<String>,
    },
    /// Print the values bound to the placeholders of the pattern.
    Match { path: String },
    /// Build a path by substituting values into the pattern.
    Stringify {
        /// Value for a placeholder. This takes the form `name=value`, and must
        /// be given once for every placeholder in the pattern.
        #[clap(long, short = 'D')]
        define: Vec<String>,
    },
    /// Print the compiled form of the pattern.
    Inspect,
}

/// Output mode.
#[derive(Clone, Copy, Default, Debug, clap::ValueEnum)]
pub enum OutputChoice {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON value on stdout.
    Json,
}

#[derive(Debug, serde::Serialize)]
struct Inspection<'a> {
    pattern: &'a str,
    regex: &'a str,
    base_path: &'a str,
    params: Vec<&'a str>,
    parts: &'a [pathmap::Part],
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
                .with_env_var("PATHMAP_LOG")
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match try_main(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<ExitCode> {
    let mapper = PathMapper::new(&args.pattern)
        .with_context(|| format!("could not compile pattern '{}'", args.pattern))?;
    tracing::debug!("Base path: {}", mapper.base_path());

    match args.command {
        Command::Test { paths } => {
            let results: Vec<(&str, bool)> = paths
                .iter()
                .map(|path| (path.as_str(), mapper.test(path)))
                .collect();
            match args.output_format {
                OutputChoice::Text => {
                    for (path, matched) in &results {
                        let verdict = if *matched { "match" } else { "no match" };
                        println!("{path}: {verdict}");
                    }
                }
                OutputChoice::Json => {
                    let object: serde_json::Map<String, serde_json::Value> = results
                        .iter()
                        .map(|(path, matched)| ((*path).to_owned(), (*matched).into()))
                        .collect();
                    println!("{}", serde_json::Value::Object(object));
                }
            }
            if results.iter().all(|(_, matched)| *matched) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Command::Match { path } => {
            let bindings = mapper.match_path(&path)?;
            match args.output_format {
                OutputChoice::Text => {
                    for (id, value) in bindings.iter() {
                        println!("{id}={value}");
                    }
                }
                OutputChoice::Json => println!("{}", serde_json::to_string(&bindings)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Stringify { define } => {
            let bindings = parse_defines(&define)?;
            let path = mapper.stringify(&bindings)?;
            match args.output_format {
                OutputChoice::Text => println!("{path}"),
                OutputChoice::Json => println!("{}", serde_json::to_string(&path)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Inspect => {
            let inspection = Inspection {
                pattern: mapper.pattern(),
                regex: mapper.compiled().as_str(),
                base_path: mapper.base_path(),
                params: mapper.params(),
                parts: mapper.compiled().parts(),
            };
            match args.output_format {
                OutputChoice::Text => {
                    println!("pattern:   {}", inspection.pattern);
                    println!("regex:     {}", inspection.regex);
                    println!("base path: {}", inspection.base_path);
                    println!("params:    {}", inspection.params.join(", "));
                    for part in inspection.parts {
                        let kind = match part {
                            pathmap::Part::Static { .. } => "static",
                            pathmap::Part::Single { .. } => "single",
                            pathmap::Part::Multi { .. } => "multi",
                        };
                        println!("  {kind:<6} {:<24} {}", part.to_string(), part.fragment());
                    }
                }
                OutputChoice::Json => {
                    println!("{}", serde_json::to_string_pretty(&inspection)?);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn parse_defines(defines: &[String]) -> Result<Bindings> {
    defines
        .iter()
        .map(|define| {
            define
                .split_once('=')
                .with_context(|| format!("expected `name=value`, got '{define}'"))
        })
        .collect()
}
