mod cargo;
mod config;
mod error;
mod release;
mod ui;

use clap::Parser;
use config::Config;
use error::{ReleaseResult, print_error};

/// Release workspace plugin crates one at a time with cargo-release
#[derive(Parser)]
#[command(name = "plugin-release")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Version bump strategy forwarded to cargo-release (patch, minor, major, ...)
  #[arg(long, default_value = "patch")]
  bump: String,

  /// Only release crates whose name ends with this suffix
  #[arg(long = "type", value_name = "SUFFIX")]
  release_type: Option<String>,

  /// Release exactly these crates instead of querying the workspace
  #[arg(short = 'p', long = "packages", value_name = "NAME")]
  packages: Vec<String>,

  /// Crate names to skip regardless of source
  #[arg(short = 'x', long = "exclude", value_name = "NAME")]
  exclude: Vec<String>,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();
  let config = Config::new(cli.bump, cli.release_type, cli.packages, cli.exclude);

  if let Err(err) = run(&config) {
    print_error(&err);
    std::process::exit(err.exit_code().as_i32());
  }
}

fn run(config: &Config) -> ReleaseResult<()> {
  let plan = release::resolve_plan(config)?;

  if !release::confirm_plan(&config.bump, &plan)? {
    println!("⏭️  Aborted, nothing released.");
    return Ok(());
  }

  release::release_all(&config.bump, &plan, release::RELEASE_DELAY)
}
