use anyhow::Result;
use ciscohash::{DEFAULT_SALT_LEN, HashOptions, Salt, hash_password, read_password};
use clap::{ArgAction, Parser};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

/// Exit status for every failure, the unsigned form of -1.
const EXIT_FAILURE: u8 = 255;

const USAGE_NOTES: &str = "\
To hash a password, simply push the password to STDIN, taking care
to not leak it to tools such as 'ps', e.g. using bash:

  ciscohash <<< \"my password\"

or

  echo \"my password\" | ciscohash

as 'echo' is usually a shell builtin, hence not appearing in 'ps'";

#[derive(Debug, Parser)]
#[command(name = "ciscohash")]
#[command(
    about = "Generate Cisco IOS-XE type 8 (PBKDF2-SHA256) and type 9 (scrypt) password hashes.",
    after_help = USAGE_NOTES,
    disable_version_flag = true
)]
struct Cli {
    /// Print version and build information
    #[arg(long)]
    version: bool,

    /// Fixed salt for the type 8 hash, 4 to 32 characters of [.0-9A-Za-z]. '/' is not accepted, even though generated salts may contain it
    #[arg(long = "salt-type8", value_name = "SALT")]
    salt_type8: Option<Salt>,

    /// Fixed salt for the type 9 hash, 4 to 32 characters of [.0-9A-Za-z]. '/' is not accepted, even though generated salts may contain it
    #[arg(long = "salt-type9", value_name = "SALT")]
    salt_type9: Option<Salt>,

    /// Length of generated salts
    #[arg(
        long = "salt-len",
        value_name = "N",
        default_value_t = DEFAULT_SALT_LEN as u8,
        value_parser = clap::value_parser!(u8).range(1..=64)
    )]
    salt_len: u8,

    /// Log more details to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn version_line() -> String {
    format!(
        "Version {:?} ({}) build at {}",
        env!("CARGO_PKG_VERSION"),
        option_env!("CISCOHASH_COMMIT").unwrap_or("undefined"),
        option_env!("CISCOHASH_BUILD_DATE").unwrap_or("undefined"),
    )
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_max_level(level)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Cli) -> Result<()> {
    let options = HashOptions::new(args.salt_type8, args.salt_type9)
        .with_salt_len(usize::from(args.salt_len));

    let password = read_password()?;
    let record = hash_password(&password, &options)?;
    drop(password);

    println!("{}", record.to_json()?);
    Ok(())
}

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if args.version {
        println!("{}", version_line());
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
