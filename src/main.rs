use std::fmt;
use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser};
use crossterm::style::{Stylize, style};

use regen::wizard::{self, StdioPrompt};
use regen::{GenerationOptions, Lang, Modifiers, Text, apply_anchors, preset, render_report};

const PATTERN_REQUIRED: Text = Text::new(
    "Regular expression pattern is required",
    "需要提供正则表达式模式",
);
const ERROR: Text = Text::new("Error:", "错误:");

/// Neither a pattern nor a preset was given; the help text follows the error.
#[derive(Debug)]
struct MissingPattern(Lang);

impl fmt::Display for MissingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PATTERN_REQUIRED.get(self.0))
    }
}

impl std::error::Error for MissingPattern {}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  regen -p email\n  regen --wizard\n  regen -m -i \"\\d+\" \"Match one or more digits\"")]
struct Args {
    /// Regular expression pattern
    #[arg(value_name = "PATTERN", allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Description shown with the pattern
    #[arg(value_name = "DESCRIPTION", allow_hyphen_values = true)]
    description: Option<String>,

    /// Use preset pattern (credit-card, date, email, hex, ip, phone, time, url)
    #[arg(short = 'p', long, value_name = "NAME")]
    preset: Option<String>,

    /// Match whole line (add ^ and $)
    #[arg(short = 'm', long = "match-whole")]
    match_whole: bool,

    /// Case insensitive
    #[arg(short = 'i', long)]
    case_insensitive: bool,

    /// Multiline mode
    #[arg(long)]
    multiline: bool,

    /// Dot matches all characters (including newline)
    #[arg(long)]
    dotall: bool,

    /// Output regex explanation
    #[arg(short = 'e', long)]
    explain: bool,

    /// Output format (regex, cpp, python, java, javascript, go, rust)
    #[arg(short = 'f', long, value_name = "FORMAT", default_value = "regex")]
    format: String,

    /// Enter wizard mode
    #[arg(short = 'w', long)]
    wizard: bool,
}

impl Args {
    fn options(&self) -> GenerationOptions {
        GenerationOptions {
            match_whole_line: self.match_whole,
            modifiers: Modifiers {
                case_insensitive: self.case_insensitive,
                multiline: self.multiline,
                dot_all: self.dotall,
            },
            explain: self.explain,
            target: (self.format != "regex").then(|| self.format.clone()),
        }
    }
}

/// Install a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=regen=debug`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let lang = Lang::from_env();

    match run(lang) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let prefix = ERROR.get(lang);
            if std::io::stderr().is_terminal() {
                eprintln!("{} {err}", style(prefix).red().bold());
            } else {
                eprintln!("{prefix} {err}");
            }
            if err.is::<MissingPattern>() {
                println!("{}", Args::command().render_help());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(lang: Lang) -> Result<()> {
    if std::env::args_os().len() <= 1 {
        Args::command().print_help()?;
        return Ok(());
    }

    let args = Args::parse();
    tracing::debug!(?args, ?lang, "parsed arguments");

    let report = if args.wizard {
        wizard::run(&mut StdioPrompt, lang)?
    } else {
        direct(&args, lang)?
    };
    print_report(&report);
    Ok(())
}

/// Build the report from command-line arguments alone.
fn direct(args: &Args, lang: Lang) -> Result<String> {
    let (pattern, description) = match &args.preset {
        Some(name) => {
            let preset = preset::require(name, lang)
                .map_err(|err| anyhow!("{err} ({})", preset::names()))?;
            (preset.pattern.to_string(), preset.label(lang))
        }
        None => {
            let pattern = args
                .pattern
                .clone()
                .ok_or(MissingPattern(lang))?;
            (pattern, args.description.clone().unwrap_or_default())
        }
    };

    let options = args.options();
    let pattern = apply_anchors(&pattern, options.match_whole_line);
    render_report(&pattern, &description, &options, lang)
}

/// Print the report, emphasising its title line on a terminal.
fn print_report(report: &str) {
    let (title, rest) = report.split_once('\n').unwrap_or((report, ""));
    if std::io::stdout().is_terminal() {
        println!("{}", style(title).bold());
    } else {
        println!("{title}");
    }
    print!("{rest}");
}
