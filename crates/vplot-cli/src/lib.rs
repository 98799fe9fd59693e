//! Command-line driver for the plotting pipeline.
//!
//! Reads an SVG document from a file (or stdin with `-`), extracts its
//! path descriptions, and plots each one onto a simulated surface. Each
//! shape is fitted and centered independently, exactly in document order.
//!
//! A malformed shape aborts the run by default, naming the shape by its
//! `id` attribute or document index; with `--keep-going` it is skipped
//! with a warning and the remaining shapes are plotted.

use std::fs;
use std::io::{self, Read};

use log::{info, warn};
use thiserror::Error;
use vplot_device::{Profile, ProfileError, SimulatedSurface};
use vplot_svg::{extract_paths, ExtractError, PathSource};

const USAGE: &str = "\
usage: plotsvg [options] <input>
  input: svg file to plot, or `-` for stdin
options:
  --fill <fraction>    fraction of the canvas to fill (default 0.5)
  --profile <name>     builtin profile name, or path to a JSON profile
                       (builtin: default, plotbert)
  --keep-going         skip malformed shapes instead of aborting
";

/// Errors that abort the run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Usage { message: String },
    #[error("cannot read {input}: {source}")]
    Input {
        input: String,
        source: io::Error,
    },
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("path `{shape}`: {source}")]
    Shape {
        shape: String,
        source: vplot_core::PlotError,
    },
}

/// Parsed command-line options.
struct Options {
    input: String,
    fill: f64,
    profile: String,
    keep_going: bool,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut input = None;
        let mut fill = 0.5;
        let mut profile = "default".to_string();
        let mut keep_going = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fill" => {
                    let value = args.next().ok_or_else(|| usage("--fill needs a value"))?;
                    fill = value
                        .parse()
                        .map_err(|_| usage(&format!("bad fill fraction `{value}`")))?;
                }
                "--profile" => {
                    profile = args.next().ok_or_else(|| usage("--profile needs a value"))?;
                }
                "--keep-going" => keep_going = true,
                "-h" | "--help" => return Err(usage("")),
                other if other.starts_with("--") => {
                    return Err(usage(&format!("unknown option `{other}`")));
                }
                other => {
                    if input.replace(other.to_string()).is_some() {
                        return Err(usage("more than one input given"));
                    }
                }
            }
        }

        let input = input.ok_or_else(|| usage("no input given"))?;
        Ok(Self {
            input,
            fill,
            profile,
            keep_going,
        })
    }
}

fn usage(message: &str) -> CliError {
    let message = if message.is_empty() {
        USAGE.to_string()
    } else {
        format!("{message}\n\n{USAGE}")
    };
    CliError::Usage { message }
}

/// Resolve `--profile`: builtin name first, then a JSON file path.
fn load_profile(name: &str) -> Result<Profile, CliError> {
    match Profile::builtin(name) {
        Ok(profile) => Ok(profile),
        Err(ProfileError::UnknownProfile(_)) if name.ends_with(".json") => {
            let json = fs::read_to_string(name).map_err(|source| CliError::Input {
                input: name.to_string(),
                source,
            })?;
            Ok(Profile::from_json(&json)?)
        }
        Err(e) => Err(e.into()),
    }
}

fn read_input(input: &str) -> Result<String, CliError> {
    let result = if input == "-" {
        let mut svg = String::new();
        io::stdin().read_to_string(&mut svg).map(|_| svg)
    } else {
        fs::read_to_string(input)
    };
    result.map_err(|source| CliError::Input {
        input: input.to_string(),
        source,
    })
}

/// Name a shape for error reporting: its `id` if present, else its
/// position in the document.
fn shape_label(source: &PathSource, index: usize) -> String {
    match &source.id {
        Some(id) => id.clone(),
        None => format!("#{index}"),
    }
}

pub fn run() -> Result<(), CliError> {
    env_logger::init();

    let opts = Options::parse(std::env::args().skip(1))?;
    let svg = read_input(&opts.input)?;
    let profile = load_profile(&opts.profile)?;
    let mut surface = SimulatedSurface::new(profile);

    let sources = extract_paths(&svg)?;
    let mut plotted = 0usize;
    for (index, source) in sources.iter().enumerate() {
        match vplot_core::plot(&source.data, opts.fill, &mut surface) {
            Ok(()) => plotted += 1,
            Err(e) => {
                let shape = shape_label(source, index);
                if opts.keep_going {
                    warn!("skipping path `{shape}`: {e}");
                } else {
                    return Err(CliError::Shape { shape, source: e });
                }
            }
        }
    }

    info!(
        "plotted {plotted} of {} paths: {} moves, {} pen-down segments",
        sources.len(),
        surface.moves(),
        surface.segments()
    );
    Ok(())
}
