//! Monkey CLI - tokenizes Monkey source from the command line or a REPL.

use std::env;
use std::fs;
use std::path::Path;

use monkey::{lex_bytes_with, IllegalMode, LexConfig};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = ">> ";

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), String> {
    let mut eval_code: Option<String> = None;
    let mut interactive = false;
    let mut file: Option<String> = None;
    let mut config = LexConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "-v" | "--version" => {
                print_version();
                return Ok(());
            }
            "-e" | "--eval" => {
                i += 1;
                if i >= args.len() {
                    return Err("-e requires an argument".to_string());
                }
                eval_code = Some(args[i].clone());
            }
            "-i" | "--interactive" => {
                interactive = true;
            }
            "--strict" => {
                config.illegal = IllegalMode::Reject;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                file = Some(arg.clone());
                break;
            }
        }
        i += 1;
    }

    if let Some(code) = eval_code {
        for line in render_tokens(code.as_bytes(), config)? {
            println!("{}", line);
        }

        if interactive {
            start_repl(config)?;
        }
    } else if let Some(filepath) = file {
        for line in run_file(&filepath, config)? {
            println!("{}", line);
        }

        if interactive {
            start_repl(config)?;
        }
    } else {
        start_repl(config)?;
    }

    Ok(())
}

fn print_usage() {
    println!(
        r#"
Monkey v{} - lexer for the Monkey scripting language

Usage:
  monkey [options] [file]

Options:
  -h, --help         Show this help message
  -v, --version      Show version
  -e, --eval         Tokenize code from command line
  -i, --interactive  Start REPL after tokenizing a file or -e code
      --strict       Fail on the first illegal character

Examples:
  monkey                       Start interactive REPL
  monkey script.monkey         Tokenize a script file
  monkey -e "let x = 1;"       Tokenize code
"#,
        VERSION
    );
}

fn print_version() {
    println!("Monkey {}", VERSION);
}

/// Tokenize `source` and render one line per token, excluding `Eof`.
fn render_tokens(source: &[u8], config: LexConfig) -> Result<Vec<String>, String> {
    let tokens = lex_bytes_with(source, config).map_err(|e| e.to_string())?;
    Ok(tokens
        .iter()
        .filter(|t| !t.is_eof())
        .map(ToString::to_string)
        .collect())
}

fn run_file(filepath: &str, config: LexConfig) -> Result<Vec<String>, String> {
    let path = Path::new(filepath);

    if !path.exists() {
        return Err(format!("File not found: {}", filepath));
    }

    // Raw bytes: anything that is not ASCII is reported as an illegal character.
    let code = fs::read(path).map_err(|e| format!("Failed to read file: {}", e))?;

    render_tokens(&code, config).map_err(|e| format!("Error in {}: {}", filepath, e))
}

fn start_repl(config: LexConfig) -> Result<(), String> {
    println!("Monkey v{} - Type 'exit' or Ctrl+D to quit", VERSION);
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| format!("Failed to create editor: {}", e))?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "exit" || trimmed == "quit" {
                    println!("Goodbye!");
                    break;
                }

                if trimmed.starts_with('/') {
                    handle_command(trimmed);
                    continue;
                }

                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed).ok(); // Ignore history errors

                // Each line is lexed on its own; tokens never span reads.
                match render_tokens(line.as_bytes(), config) {
                    Ok(rendered) => {
                        for tok in rendered {
                            println!("{}", tok);
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                return Err(format!("Readline error: {}", e));
            }
        }
    }

    Ok(())
}

fn handle_command(cmd: &str) {
    let parts: Vec<&str> = cmd[1..].split_whitespace().collect();
    let command = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match command.as_str() {
        "help" => {
            println!(
                r#"
REPL Commands:
  /help     Show this help
  /clear    Clear the screen
  /exit     Exit the REPL
"#
            );
        }
        "clear" => {
            // ANSI escape code to clear screen
            print!("\x1B[2J\x1B[1;1H");
        }
        "exit" | "quit" => {
            std::process::exit(0);
        }
        _ => {
            println!("Unknown command: /{}. Type /help for available commands.", command);
        }
    }
}
