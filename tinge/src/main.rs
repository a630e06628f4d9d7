// tinge/src/main.rs
//! Tinge entry point.
//!
//! Parses the command line, initializes logging, assembles the rule
//! request, builds the palette and the commission, and hands the painter
//! to the stream runner (or renders the `--list` report).

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error};

use tinge::cli::Cli;
use tinge::config::{self, ConfigError};
use tinge::logger;
use tinge::runner::{Runner, Source};
use tinge_core::{Commission, Painter, Palette, Style, TingeError};

/// sysexits-style codes: rule syntax problems are data errors, missing
/// rule sources are config errors.
const EX_OK: i32 = 0;
const EX_DATAERR: i32 = 65;
const EX_CONFIG: i32 = 78;

fn main() {
    let args = Cli::parse();
    logger::init(args.verbose);

    if let Err(err) = run(&args) {
        error!("{:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run(args: &Cli) -> Result<()> {
    let palette = Palette::extended();

    if args.list {
        print_available(&palette);
        return Ok(());
    }

    let request = config::assemble_request(args)?;
    let tokens = config::split_request(&request);
    let commission = Commission::new(&tokens, &args.delimiter, &palette)?;
    debug!("commission holds {} rule(s)", commission.len());

    let painter = Painter::with_match_only(commission, args.match_only);

    // An interrupt during the read loop is a normal shutdown, not an error.
    ctrlc::set_handler(|| std::process::exit(EX_OK))
        .context("failed to install interrupt handler")?;

    let source = match &args.command {
        Some(command) => Source::Command(command.clone()),
        None => Source::Stdin,
    };

    Runner::new(painter).run(&source)
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.downcast_ref::<TingeError>().is_some() {
            return EX_DATAERR;
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return EX_CONFIG;
        }
    }
    1
}

/// Renders the `--list` report: every style family with a painted sample,
/// plus the built-in presets and their descriptions.
fn print_available(palette: &Palette) {
    println!("Styles");
    println!("------");
    println!();
    println!("8-color styles (each also has a _bold and an _underlined variant):");
    println!();
    for hue in [
        "black",
        "red",
        "green",
        "yellow",
        "blue",
        "magenta",
        "cyan",
        "light_gray",
    ] {
        println!("    {}", swatch(palette, hue));
    }
    println!();
    println!(
        "256-color styles: foreground names are 'colorNUM', background names are \
'bgcolorNUM', with NUM zero-padded to three digits:"
    );
    println!();
    println!(
        "    {}  {}  {}",
        swatch(palette, "color196"),
        swatch(palette, "color046_bold"),
        swatch(palette, "bgcolor021_underlined"),
    );
    println!();
    println!("The special style 'blind' discards every line its pattern matches.");
    println!();
    println!("Presets");
    println!("-------");
    println!();
    for (name, description) in config::preset_summaries() {
        println!("{:>12}: {}", name, description);
    }
}

/// A style name painted with its own codes, so the terminal shows what the
/// style looks like.
fn swatch(palette: &Palette, name: &str) -> String {
    match palette.lookup(name) {
        Some(Style::Brush { open, close, .. }) => format!("{}{}{}", open, name, close),
        _ => name.to_string(),
    }
}
