//! quadroot main: arguments first, interactive prompt as the fallback.
use anyhow::Context;
use clap::Parser; // trait import enables QuadCli::parse()
use colored::Colorize;
use std::io;

use quadroot::cli::{OutputFormat, QuadCli};
use quadroot::config::Settings;
use quadroot::core::report::{render_json, render_text, Report};
use quadroot::core::Coefficients;
use quadroot::debug_log;
use quadroot::io::input::{from_args, prompt_coefficients};

fn read_interactively() -> anyhow::Result<Coefficients> {
    // stdout is locked by the prompt loop, so the handler only touches stderr
    ctrlc::set_handler(|| {
        eprintln!();
        std::process::exit(130);
    })
    .context("install Ctrl-C handler")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let coeffs = prompt_coefficients(&mut stdin.lock(), &mut stdout.lock(), |msg| {
        msg.red().to_string()
    })
    .context("reading coefficients")?;
    Ok(coeffs)
}

fn main() -> anyhow::Result<()> {
    let args = QuadCli::parse();

    let mut settings = Settings::load(&args.config);
    args.apply_overrides(&mut settings);
    if !settings.color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let coeffs = match from_args(args.coeffs.as_slice()) {
        Some(c) => {
            debug_log!("coefficients from arguments: {:?}", c);
            c
        }
        None => {
            let c = read_interactively()?;
            debug_log!("coefficients from prompt: {:?}", c);
            c
        }
    };

    let roots = coeffs.solve();
    debug_log!("discriminant {} -> {}", coeffs.discriminant(), roots.kind());

    match settings.format {
        OutputFormat::Text => println!("{}", render_text(&roots, &settings.tolerance)),
        OutputFormat::Json => {
            let report = Report::new(coeffs, &roots, &settings.tolerance);
            println!("{}", render_json(&report).context("serialize report")?);
        }
    }
    Ok(())
}
