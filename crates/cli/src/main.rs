use std::io::{stderr, stdin, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use console_helpers::cli_args::Args;
use console_helpers::prompting::{
    ColorScheme, Console, ConsoleSettings, DefaultChoice, SelectedValue,
};
use console_helpers_core::error::Result;
use console_helpers_core::{config, file_handling};
use log::{debug, info};

/// Exit code when nothing was picked
const DISMISSED_EXIT_CODE: u8 = 1;
const ERROR_EXIT_CODE: u8 = 2;

enum Outcome {
    Picked(String),
    Dismissed,
}

/// Load the theme and build the console settings
fn initialize_settings(args: &Args) -> Result<ConsoleSettings> {
    let theme_path = config::get_theme_path(&args.theme_path);
    debug!("Theme path: `{}`", theme_path);

    // Only an explicitly given theme file has to exist
    let theme = file_handling::get_theme_definition(&theme_path, args.theme_path.is_some())?;

    Ok(ConsoleSettings {
        scheme: ColorScheme::from_theme(&theme)?,
        redraw_echo: stdin().is_terminal(),
    })
}

fn execute(args: &Args) -> Result<Outcome> {
    let settings = initialize_settings(args)?;

    // Interaction goes to stderr so the picked value can be captured from stdout
    let mut console = Console::new(stdin().lock(), stderr(), settings);

    if let Some(title) = &args.title {
        console.header(title)?;
    }

    let selection = console.select_from_displayed_choices(
        &args.prompt,
        &args.choices,
        args.default.map(DefaultChoice::Index),
        args.select_options(),
    )?;

    Ok(match selection {
        Some(SelectedValue::Value(choice)) => Outcome::Picked(choice.clone()),
        Some(SelectedValue::Cancelled) => {
            info!("Selection was cancelled");
            Outcome::Dismissed
        }
        None => {
            info!("Nothing was selected");
            Outcome::Dismissed
        }
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match execute(&args) {
        Ok(Outcome::Picked(choice)) => {
            println!("{choice}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Dismissed) => ExitCode::from(DISMISSED_EXIT_CODE),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
