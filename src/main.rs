use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::error::Error;
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use gridsort::core::choices::{Answer, Choice};
use gridsort::core::config::{self, CliOverrides};
use gridsort::core::question::{DEFAULT_MESSAGE, DefaultValue, Question};
use gridsort::core::render::{GridRenderer, SummaryStyle};
use gridsort::core::script::parse_key_script;
use gridsort::core::session::{PromptSession, RecordingHost};
use gridsort::tui::ansi::frame_to_ansi;
use gridsort::tui::palette::Palette;
use gridsort::tui::{self, Outcome, TerminalHost};

/// Exit code for Esc / Ctrl+C, as a shell would report SIGINT.
const ABORTED_EXIT_CODE: u8 = 130;

#[derive(Parser)]
#[command(name = "gridsort", about = "Rearrange items in a terminal grid")]
struct Args {
    /// Choices to lay out, in order (replace any from --question)
    choices: Vec<String>,

    /// Number of columns (default: ceil(sqrt(number of choices)))
    #[arg(short, long)]
    cols: Option<usize>,

    /// Initially selected cell: a 0-based index or a choice value
    #[arg(short, long)]
    default: Option<String>,

    /// Question text shown above the grid
    #[arg(short, long)]
    message: Option<String>,

    /// Key of the answer in the JSON output
    #[arg(short, long)]
    name: Option<String>,

    /// Load the question from a TOML file
    #[arg(short, long)]
    question: Option<PathBuf>,

    /// How to show the prompt once answered
    #[arg(long, value_enum)]
    summary: Option<SummaryStyle>,

    /// Run headless with a key script, e.g. "shift+right down enter"
    #[arg(long)]
    keys: Option<String>,

    /// Disable colours
    #[arg(long)]
    no_color: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("gridsort: {e}");
            ExitCode::FAILURE
        }
    }
}

/// File logger at `~/.gridsort/gridsort.log`; the terminal belongs to the prompt.
fn init_logging(verbose: bool) {
    let Some(dir) = config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create(dir.join("gridsort.log")) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn run(args: Args) -> Result<ExitCode, Box<dyn Error>> {
    let file_config = config::load_config()?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            cols: args.cols,
            summary: args.summary,
            no_color: args.no_color,
        },
    );

    let mut question = match &args.question {
        Some(path) => Question::load(path)?,
        None => Question::new(DEFAULT_MESSAGE, Vec::new()),
    };
    if !args.choices.is_empty() {
        question.choices = args.choices.into_iter().map(Choice::from).collect();
    }
    if let Some(message) = args.message {
        question.message = message;
    }
    if let Some(name) = args.name {
        question.name = name;
    }
    // Cols: CLI → question file → env/config
    question.options.cols = args
        .cols
        .or(question.options.cols)
        .filter(|&c| c > 0)
        .or(resolved.cols);

    info!(
        "gridsort starting: '{}' with {} choices",
        question.name,
        question.choices.len()
    );

    let default = args.default.as_deref().map(DefaultValue::parse);
    let renderer = GridRenderer::new(resolved.theme.clone(), resolved.summary);
    let palette = Palette::from_config(&resolved.colors, resolved.color);

    let answers = match args.keys {
        Some(script) => run_script(&question, renderer, &palette, default, &script)?,
        None => {
            let session = PromptSession::new(&question, renderer, TerminalHost::new(default))?;
            match tui::run(session, &palette)? {
                Outcome::Answered(answers) => answers,
                Outcome::Aborted => {
                    warn!("Prompt aborted");
                    return Ok(ExitCode::from(ABORTED_EXIT_CODE));
                }
            }
        }
    };

    let mut output = serde_json::Map::new();
    output.insert(question.name.clone(), serde_json::to_value(&answers)?);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}

/// Drive the prompt with scripted keys. The final frame goes to stderr so
/// stdout carries only the answer.
fn run_script(
    question: &Question,
    renderer: GridRenderer,
    palette: &Palette,
    default: Option<DefaultValue>,
    script: &str,
) -> Result<Vec<Answer>, Box<dyn Error>> {
    let actions = parse_key_script(script)?;
    let host = RecordingHost::with_default(default);
    let mut session = PromptSession::new(question, renderer, host)?;
    session.start();
    for action in actions {
        session.dispatch(action);
    }

    let host = session.into_host();
    if let Some(frame) = host.last_frame() {
        eprintln!("{}", frame_to_ansi(frame, palette));
    }
    host.answers
        .ok_or_else(|| "key script ended without submitting (add \"enter\")".into())
}
