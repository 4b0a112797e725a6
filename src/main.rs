mod checks;
mod commands;
mod core;

use clap::{Parser, Subcommand};
use crate::core::error::{LiftoffError, print_error};

/// Declarative release-pipeline configuration: discovery, loading, validation
#[derive(Parser)]
#[command(name = "liftoff")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct LiftoffCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Scaffold a release configuration for the current repository
  Init {
    /// Overwrite an existing configuration without asking
    #[arg(short, long)]
    force: bool,
  },

  /// Validate the release configuration and report issues
  Check {
    /// Run expensive checks too (probes the repository remote)
    #[arg(long)]
    thorough: bool,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
    /// Treat warnings as errors (exit code 3)
    #[arg(long)]
    strict: bool,
  },

  /// Print the resolved release configuration
  Show {
    /// Output the canonical JSON serialization
    #[arg(long)]
    json: bool,
  },
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
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = LiftoffCli::parse();

  let result = match cli.command {
    Commands::Init { force } => commands::run_init(force),
    Commands::Check { thorough, json, strict } => commands::run_check(thorough, json, strict),
    Commands::Show { json } => commands::run_show(json),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: LiftoffError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
