use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use log::LevelFilter;
use skies_core::config::GLOSSARY_FILE;
use skies_core::core::engine::UPLOAD_FAILED;
use skies_core::prompt::PromptCommand;
use skies_core::upload::{decode_bytes, Notice};
use skies_core::{Config, SimplificationResult, SimplifierEngine};
use std::fs;
use std::io::{stdin, stdout, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(name = "plain_skies", version, about = "Plain Skies - Glossary Simplifier")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(
        long,
        short,
        global = true,
        env = "PLAIN_SKIES_GLOSSARY",
        default_value = GLOSSARY_FILE,
        help = "Glossary file to load and update"
    )]
    glossary: PathBuf,

    #[clap(long, short, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simplify text given inline or read from a file
    Simplify {
        text: Option<String>,

        #[clap(long, short, help = "Read the input text from a UTF-8 file")]
        file: Option<PathBuf>,

        #[clap(long, short, help = "Directory to write simplified.txt into")]
        output: Option<PathBuf>,
    },
    /// Look up a term
    Search { term: String },
    /// Add or replace a term
    Add { term: String, definition: String },
    /// Show how many terms the glossary holds
    Stats,
    /// Interactive prompt (default)
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = match cli.log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let config = Config::new(cli.glossary);
    let mut engine = SimplifierEngine::open(&config)
        .with_context(|| format!("Could not load glossary {:?}", config.glossary_path))?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Simplify { text, file, output } => {
            let input = match (text, file) {
                (_, Some(path)) => read_text_file(&path)?,
                (Some(text), None) => text,
                (None, None) => anyhow::bail!("Provide TEXT or --file"),
            };
            match engine.simplify(&input) {
                Some(result) => print_result(result),
                None => println!("Nothing to simplify."),
            }
            if let Some(dir) = output {
                write_download(&engine, &input, &dir)?;
            }
        }
        Commands::Search { term } => {
            if let Some(definition) = engine.search(&term) {
                println!("{}", definition);
            }
        }
        Commands::Add { term, definition } => {
            let stats = engine.add_term(&term, &definition)?;
            println!("{}", stats);
        }
        Commands::Stats => println!("{}", engine.stats()),
        Commands::Interactive => run_interactive(&mut engine, &config)?,
    }

    Ok(())
}

fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Could not read {:?}", path))?;
    Ok(decode_bytes(bytes)?)
}

fn write_download(engine: &SimplifierEngine, input: &str, dir: &Path) -> Result<()> {
    if let Some(artifact) = engine.download(input) {
        let path = artifact
            .write_to(dir)
            .with_context(|| format!("Could not write into {:?}", dir))?;
        println!("Saved {} ({})", path.display(), artifact.mime);
    }
    Ok(())
}

fn run_interactive(engine: &mut SimplifierEngine, config: &Config) -> Result<()> {
    println!("{}", "Plain Skies - Glossary Simplifier".bold().cyan());
    println!("---------------------------------------------------------------");
    println!("Glossary: {}", config.glossary_path.display());
    println!("{}", engine.stats());
    print_help();

    let mut last_input = String::new();
    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            break;
        }
        match PromptCommand::parse(&line) {
            PromptCommand::Exit => break,
            PromptCommand::Empty => {}
            PromptCommand::Help => print_help(),
            PromptCommand::Stats => println!("{}", engine.stats()),
            PromptCommand::Search(term) => {
                if let Some(definition) = engine.search(term) {
                    println!("{}", definition.blue());
                }
            }
            PromptCommand::Add { term, definition } => match engine.add_term(term, definition) {
                Ok(stats) => println!("{}", stats),
                Err(e) => print_notice(&Notice::Failure(e.to_string())),
            },
            PromptCommand::Upload(path) => {
                let path = Path::new(path);
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let notice = match fs::read(path) {
                    Ok(bytes) => engine.handle_upload_bytes(bytes, &name),
                    Err(e) => {
                        log::warn!("Upload {:?} unreadable: {}", path, e);
                        Notice::Failure(UPLOAD_FAILED.to_string())
                    }
                };
                print_notice(&notice);
            }
            PromptCommand::Download(dir) => {
                if let Err(e) = write_download(engine, &last_input, Path::new(dir)) {
                    print_notice(&Notice::Failure(format!("{:#}", e)));
                }
            }
            PromptCommand::Text(text) => {
                last_input = text.to_string();
                if let Some(result) = engine.simplify(text) {
                    print_result(result);
                }
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Type text and press [Enter] to simplify it.");
    println!("  :search TERM           look up a term");
    println!("  :add TERM = DEFINITION add or replace a term");
    println!("  :stats                 glossary size");
    println!("  :upload PATH           simplify a UTF-8 file");
    println!("  :download [DIR]        save the last simplified text as simplified.txt");
    println!("  exit                   quit");
}

fn print_result(result: &SimplificationResult) {
    println!("\n{}", "Simplified Output".bold());
    println!("{}", result.simplified_text);

    println!("\n{}", "Trace (what got simplified)".bold());
    for line in result.trace.lines() {
        println!("  {}", line.dark_grey());
    }
    println!("\n{}", result.confidence_line().dim());
}

fn print_notice(notice: &Notice) {
    match notice {
        Notice::Success(m) => println!("{}", m.as_str().green()),
        Notice::Failure(m) => println!("{}", m.as_str().red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "plain_skies",
            "simplify",
            "--glossary",
            "x.json",
            "--log-level",
            "debug",
            "rapid text",
        ])
        .unwrap();

        assert_eq!(cli.glossary, PathBuf::from("x.json"));
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(
            cli.command,
            Some(Commands::Simplify { text: Some(ref t), .. }) if t == "rapid text"
        ));
    }

    #[test]
    fn test_global_options_accepted_before_subcommand() {
        let cli = Cli::try_parse_from(["plain_skies", "-g", "y.json", "stats"]).unwrap();

        assert_eq!(cli.glossary, PathBuf::from("y.json"));
        assert!(matches!(cli.command, Some(Commands::Stats)));
    }
}
