mod commands;
mod core;
mod utils;
mod version;

use clap::{Parser, Subcommand};
use core::error::{RelverError, print_error};

/// Release version state machine: monotonic build and release versions
#[derive(Parser)]
#[command(name = "relver")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct RelverCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Decode the persisted version state, or derive a fresh one
  State {
    /// Release-note text containing a state marker (path, or - for stdin)
    #[arg(long)]
    notes: Option<String>,
    /// Release-history JSON to bootstrap from when no notes are given
    #[arg(long)]
    history: Option<String>,
  },

  /// Calculate dev and shippable versions for the next build
  Calculate {
    /// VersionState JSON (path, or - for stdin)
    state: String,
  },

  /// Advance the state after a confirmed shipment
  Advance {
    /// VersionState JSON (path, or - for stdin)
    state: String,
    /// The version that was shipped
    shipped: String,
  },

  /// Apply a base-version bump and/or phase transition
  Bump {
    /// VersionState JSON (path, or - for stdin)
    state: String,
    /// Bump kind: none, auto, patch, minor, or major
    #[arg(long, default_value = "none")]
    kind: String,
    /// Target phase: pre, rc, or rtm
    #[arg(long = "to")]
    target_phase: String,
    /// Release-history JSON to validate the proposed version against
    #[arg(long)]
    history: Option<String>,
    /// Override the pending-shipment guard
    #[arg(long)]
    force: bool,
  },

  /// Validate a version against already-shipped releases
  #[command(disable_version_flag = true)]
  Validate {
    /// Candidate version string
    version: String,
    /// Release-history JSON (path, or - for stdin)
    #[arg(long)]
    history: Option<String>,
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
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = RelverCli::parse();

  let result = match cli.command {
    Commands::State { notes, history } => commands::run_state(notes, history),
    Commands::Calculate { state } => commands::run_calculate(state),
    Commands::Advance { state, shipped } => commands::run_advance(state, shipped),
    Commands::Bump {
      state,
      kind,
      target_phase,
      history,
      force,
    } => commands::run_bump(state, kind, target_phase, history, force),
    Commands::Validate { version, history } => commands::run_validate(version, history),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: RelverError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
