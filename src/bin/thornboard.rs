// Thornboard CLI
// Drive the character mapper and keyboard session from the command line

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};

use thornboard_core::{
    default_settings_content, map, CharacterMapper, KeyOutput, KeyboardSession, Settings,
    THORN_CODE,
};

/// Thorn-aware keyboard character mapper
#[derive(Parser, Debug)]
#[command(name = "thornboard")]
#[command(version)]
#[command(about = "Map key codes to the text a thorn-aware keyboard types", long_about = None)]
struct Args {
    /// TOML settings file (defaults to ~/.config/thornboard/settings.toml)
    #[arg(short, long, value_name = "SETTINGS", global = true)]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map a single code to text
    Map {
        #[arg(allow_negative_numbers = true)]
        code: i64,

        /// Map as if shift were held
        #[arg(long)]
        shift: bool,
    },
    /// Feed a sequence of key codes through a keyboard session
    Type {
        #[arg(required = true, allow_negative_numbers = true, num_args = 1..)]
        codes: Vec<i64>,

        /// Simulated time between key presses
        #[arg(long, default_value_t = 500)]
        interval_ms: u64,
    },
    /// Show state-dependent key labels for the current settings
    Labels {
        /// Show labels with one-shot shift engaged
        #[arg(long)]
        shift: bool,
    },
    /// List the special-case table
    Table,
    /// Print a default settings file
    InitSettings,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<Settings> {
    let settings = match path {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("failed to load default settings")?,
    };
    log::debug!(
        "Settings: thorn_on_right={} use_eth_instead={} vibrate_on_keypress={}",
        settings.thorn_on_right(),
        settings.use_eth_instead(),
        settings.vibrate_on_keypress()
    );
    Ok(settings)
}

/// Feed codes through a session, returning each output and the text
/// an editor would end up holding.
fn type_codes(
    session: &mut KeyboardSession,
    codes: &[i64],
    interval: Duration,
) -> (Vec<KeyOutput>, String) {
    let mut at = Instant::now();
    let mut outputs = Vec::with_capacity(codes.len());
    let mut typed = String::new();

    for &code in codes {
        let output = session.process_key_at(code, at);
        at += interval;
        match &output {
            KeyOutput::Commit(text) => typed.push_str(text),
            KeyOutput::DeleteBackward => {
                typed.pop();
            }
            KeyOutput::Enter => typed.push('\n'),
            _ => {}
        }
        outputs.push(output);
    }

    (outputs, typed)
}

fn run_type(settings: Settings, codes: &[i64], interval: Duration) {
    let mut session = KeyboardSession::new(settings);
    let (outputs, typed) = type_codes(&mut session, codes, interval);
    for (code, output) in codes.iter().zip(&outputs) {
        println!("{:>6} -> {}", code, output);
    }
    println!("text: {:?}", typed);
}

fn run_labels(settings: Settings, shift: bool) {
    let mut session = KeyboardSession::new(settings);
    if shift {
        session.process_key(-1);
    }

    println!("layout: {}", session.layout_resource());
    if let Some(label) = session.key_label(THORN_CODE) {
        println!("thorn key: {}", label);
    }
    if let Some(icon) = session.key_label(-1) {
        println!("shift key: {}", icon);
    }
    println!("haptic feedback: {}", session.haptic_on_press());
}

fn run_table() {
    let mapper = CharacterMapper::new();
    for (code, case) in mapper.table().iter() {
        println!("{:>6}  {}  {}", code, case.unshifted, case.shifted);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Map { code, shift } => {
            println!("{}", map(code, shift));
        }
        Command::Type { codes, interval_ms } => {
            let settings = load_settings(args.settings.as_ref())?;
            run_type(settings, &codes, Duration::from_millis(interval_ms));
        }
        Command::Labels { shift } => {
            let settings = load_settings(args.settings.as_ref())?;
            run_labels(settings, shift);
        }
        Command::Table => run_table(),
        Command::InitSettings => print!("{}", default_settings_content()),
    }

    Ok(())
}
