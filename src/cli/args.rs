//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Make a solid image background transparent
#[derive(Parser, Debug, Clone)]
#[command(
    name = "remove_bg",
    version,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Image to read (any format the image decoder supports)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Where to write the PNG result
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Color distance below which a pixel becomes fully transparent [default: 50]
    #[arg(allow_negative_numbers = true)]
    pub threshold: Option<i32>,

    /// Width of the distance band over which alpha fades in [default: 30]
    #[arg(allow_negative_numbers = true)]
    pub fade: Option<i32>,

    /// Config file with a `[removal]` section
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
