use clap::{Parser, Subcommand};
use scytale::cli::{decode_file, encode_file, force_message, DecodeOptions, EncodeOptions};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("SCYTALE_VERSION");
const BUILD: &str = env!("SCYTALE_BUILD");
const PROFILE: &str = env!("SCYTALE_PROFILE");
const GIT_HASH: &str = env!("SCYTALE_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING
        .get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "scytale")]
#[command(author, about = "Columnar transposition cipher toolkit", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file of key:passes:message records
    #[command(alias = "e")]
    Encode {
        /// Input record file (plaintext messages)
        input: PathBuf,

        /// Output record file (ciphertext is appended)
        output: PathBuf,

        /// Skip the plaintext/ciphertext collision check
        #[arg(long)]
        no_collision_check: bool,
    },

    /// Decode a file of key:passes:message records
    #[command(alias = "d")]
    Decode {
        /// Input record file (ciphertext messages)
        input: PathBuf,

        /// Output record file (plaintext is appended)
        output: PathBuf,

        /// Interactively brute-force records with an empty key field
        #[arg(long)]
        brute: bool,
    },

    /// Interactively brute-force a single ciphertext with no key
    #[command(alias = "f")]
    Force {
        /// Ciphertext: column blocks separated by single spaces
        ciphertext: String,
    },
}

/// Ask the operator whether a candidate grid reads as plaintext.
fn confirm_on_stdin(grid: &str) -> bool {
    println!("{}", grid);
    print!(">> Correct? (y/N) ");
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("scytale {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode {
            input,
            output,
            no_collision_check,
        } => {
            let options = EncodeOptions {
                collision_check: !no_collision_check,
            };

            match encode_file(&input, &output, &options) {
                Ok(report) => {
                    for notice in &report.notices {
                        eprintln!("[!] {}", notice);
                    }
                    println!("Encoded {} records to {}", report.records, output.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Decode {
            input,
            output,
            brute,
        } => {
            let options = DecodeOptions { brute_force: brute };

            match decode_file(&input, &output, &options, confirm_on_stdin) {
                Ok(report) => {
                    for notice in &report.notices {
                        eprintln!("[!] {}", notice);
                    }
                    println!("Decoded {} records to {}", report.records, output.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Force { ciphertext } => match force_message(&ciphertext, confirm_on_stdin) {
            Ok(Some(recovery)) => {
                println!("Key: {}", recovery.key);
                println!("Plaintext: {}", recovery.plaintext);
                Ok(())
            }
            Ok(None) => {
                println!("No ordering confirmed");
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
