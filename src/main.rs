//! TG Control - Main Entry Point
//!
//! Signs the user in through the phone / code / 2FA wizard and then
//! opens the control panel dashboard in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{Input, Password};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tg_control::auth::{Advance, AuthStep, Session};
use tg_control::commands::CommandHandler;
use tg_control::config::PanelSettings;
use tg_control::dashboard::{Dashboard, Tab, Theme, Tone};

/// Terminal control panel for a Telegram automation bot.
#[derive(Parser, Debug)]
#[command(name = "tg_control")]
#[command(about = "Sign in and browse the Telegram automation control panel")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Tab to open after sign-in (logs, commands, settings).
    #[arg(short, long)]
    tab: Option<Tab>,

    /// Phone number to submit without prompting.
    #[arg(long)]
    phone: Option<String>,

    /// Login code to submit without prompting.
    #[arg(long)]
    code: Option<String>,

    /// Two-factor password to submit without prompting.
    #[arg(long)]
    password: Option<String>,

    /// Render the opening tab once and exit.
    #[arg(long)]
    once: bool,

    /// With --once, print the panel as JSON instead of text.
    #[arg(long, requires = "once")]
    json: bool,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
}

/// Wizard inputs given on the command line.
struct Prefilled {
    phone: Option<String>,
    code: Option<String>,
    password: Option<String>,
}

impl Prefilled {
    /// Takes the value for `step`, if one was given and not used yet.
    fn take(&mut self, step: AuthStep) -> Option<String> {
        match step {
            AuthStep::Phone => self.phone.take(),
            AuthStep::Code => self.code.take(),
            AuthStep::TwoFactor => self.password.take(),
            AuthStep::Authenticated => None,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load environment variables before reading settings
    let env_loaded = dotenvy::from_filename(&args.env_file);
    let (settings, settings_error) = PanelSettings::from_env_with_defaults();
    let color = settings.color && !args.no_color;

    let log_level = args.log_level.as_deref().unwrap_or(&settings.log_level);
    init_logging(log_level, color);

    if let Err(e) = env_loaded {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }
    if let Some(e) = settings_error {
        warn!("{}. Using the default tab.", e);
    }

    let theme = Theme::new(color);

    let mut prefilled = Prefilled {
        phone: args.phone.clone(),
        code: args.code.clone(),
        password: args.password.clone(),
    };

    let mut session = Session::new();
    authenticate(&mut session, &mut prefilled, &theme)?;

    let tab = args.tab.unwrap_or(settings.default_tab);
    let dashboard = Dashboard::open(session, tab).context("Failed to open the dashboard")?;

    if args.once {
        if args.json {
            let json = serde_json::to_string_pretty(&dashboard.snapshot())
                .context("Failed to serialize the panel")?;
            println!("{json}");
        } else {
            println!("{}", dashboard.render(&theme));
        }
        return Ok(());
    }

    run_shell(CommandHandler::new(dashboard), &theme)
}

/// Initializes the logging subsystem.
fn init_logging(level: &str, ansi: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the sign-in wizard until the session is authenticated.
///
/// Empty submissions are ignored and the same step is asked again.
fn authenticate(session: &mut Session, prefilled: &mut Prefilled, theme: &Theme) -> Result<()> {
    info!("Authentication required");
    println!("{}", theme.paint("TG_CONTROL", Tone::Primary));

    while !session.is_authenticated() {
        let step = session.step();

        let value = match prefilled.take(step) {
            Some(value) => value,
            None => prompt_step(step, theme)?,
        };

        session.set_current_input(value);
        match session.advance() {
            Advance::Moved { from, to } => debug!("Wizard step {} -> {}", from, to),
            Advance::EmptyField(step) => debug!("Empty {} submitted, asking again", step),
            Advance::AlreadyAuthenticated => {}
        }
    }

    println!("{}", theme.paint("✓ Secure connection established", Tone::Green));
    Ok(())
}

/// Asks for the input of a single wizard step.
fn prompt_step(step: AuthStep, theme: &Theme) -> Result<String> {
    println!();
    println!("{}", theme.paint(step.prompt(), Tone::Muted));

    let label = format!(
        "{} (e.g. {}) [{}]",
        step.field_label(),
        step.placeholder(),
        step.submit_label()
    );

    let value = if step.is_secret() {
        Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .context("Failed to read the two-factor password")?
    } else {
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read {}", step.field_label()))?
    };

    Ok(value)
}

/// Runs the dashboard prompt until the user quits.
fn run_shell(mut handler: CommandHandler, theme: &Theme) -> Result<()> {
    info!("Dashboard opened");
    println!();
    println!("{}", handler.dashboard().render(theme));
    println!("{}", theme.paint("Type 'help' for commands.", Tone::Muted));

    loop {
        let line: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read command")?;

        if line.trim().is_empty() {
            continue;
        }

        let before = handler.dashboard().active();
        let Some(result) = handler.try_handle(&line) else {
            debug!("Unknown command: {}", line.trim());
            println!(
                "{}",
                theme.paint("Unknown command. Type 'help' for commands.", Tone::Red)
            );
            continue;
        };

        if handler.dashboard().active() != before {
            println!();
            println!("{}", handler.dashboard().render(theme));
        } else if !result.message.is_empty() {
            let tone = if result.success { Tone::Green } else { Tone::Red };
            println!("{}", theme.paint(&result.message, tone));
        }

        if result.quit {
            break;
        }
    }

    Ok(())
}
