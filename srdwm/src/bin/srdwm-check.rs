use anyhow::{bail, Result};
use clap::{arg, command};
use srdwm::config::{self, Config};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = command!("srdwm-check")
        .about("Checks syntax of the configuration file")
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!(-b --bindings "Lists the key combinations the keybinds resolve to."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    println!(
        "\x1b[0;94m::\x1b[0m srdwm version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let path = match matches.get_one::<String>("INPUT") {
        Some(path) => PathBuf::from(path),
        None => config::get_default_path()?,
    };
    if verbose {
        println!("Reading {}", path.display());
    }
    let config = match config::load_from_path(&path) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => {
            println!("Configuration failed. Reason: {err:?}");
            bail!("could not load {}", path.display());
        }
    };
    if verbose {
        dbg!(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
    let issues = config.check(verbose);
    for issue in &issues {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {issue} \x1b[0m");
    }
    if matches.get_flag("bindings") {
        print_bindings(&config);
    }
    if !issues.is_empty() {
        bail!("{} problem(s) found", issues.len());
    }
    println!("\x1b[0;92m    -> Configuration OK \x1b[0m");
    Ok(())
}

fn print_bindings(config: &Config) {
    println!("\x1b[0;94m::\x1b[0m Key bindings:");
    for (combo, command) in config.bindings() {
        println!("    {combo:<20} {command:?}");
    }
}
