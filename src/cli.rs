//! Command-line interface for jwt-session.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::JwtSessionError;
use crate::session::{ReadOptions, TokenSessionStrategy, WriteOptions};
use crate::Result;

/// Subcommand to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Decode a token and print its payload or one key.
    Read,
    /// Store a value under a key and print the resulting token.
    Write,
}

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Subcommand.
    pub command: Option<Command>,
    /// Signing secret (overrides config file and environment).
    pub secret: Option<String>,
    /// Signing algorithm (overrides config file and environment).
    pub algorithm: Option<String>,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Existing token.
    pub token: Option<String>,
    /// Session key to read or write.
    pub key: Option<String>,
    /// Value to write (JSON, or a plain string).
    pub value: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> std::result::Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> std::result::Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('s') | Long("secret") => {
                result.secret = Some(parser.value()?.parse()?);
            }
            Short('a') | Long("algorithm") => {
                result.algorithm = Some(parser.value()?.parse()?);
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('t') | Long("token") => {
                result.token = Some(parser.value()?.parse()?);
            }
            Short('k') | Long("key") => {
                result.key = Some(parser.value()?.parse()?);
            }
            Short('v') | Long("value") => {
                result.value = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) if result.command.is_none() => {
                let name = val.to_string_lossy().into_owned();
                result.command = Some(match name.as_str() {
                    "read" => Command::Read,
                    "write" => Command::Write,
                    _ => return Err(ArgsError::UnknownCommand(name)),
                });
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Interpret a command-line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

/// Execute the parsed command.
///
/// Returns the line to print, if any.
pub fn run(args: &Args, config: &Config) -> Result<Option<String>> {
    let command = args.command.ok_or_else(|| {
        JwtSessionError::Args("missing command: expected 'read' or 'write'".into())
    })?;

    let strategy = TokenSessionStrategy::new(config.strategy.clone())?;

    match command {
        Command::Read => {
            let options = ReadOptions {
                key: args.key.clone(),
            };
            let value = strategy
                .read(args.token.as_deref(), &options)
                .unwrap_or(serde_json::Value::Null);
            Ok(Some(serde_json::to_string(&value)?))
        }
        Command::Write => {
            let raw = args
                .value
                .as_deref()
                .ok_or_else(|| JwtSessionError::Args("write requires --value".into()))?;
            let options = WriteOptions {
                key: args.key.clone(),
                token: args.token.clone(),
            };
            strategy.write(parse_value(raw), &options)
        }
    }
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"jwt-session {version}
Stateless session storage backed by signed JSON Web Tokens

USAGE:
    jwt-session [OPTIONS] <COMMAND>

COMMANDS:
    read                    Print the token's payload, or one key with --key
    write                   Store --value under --key and print the new token

OPTIONS:
    -s, --secret <SECRET>   Signing secret
    -a, --algorithm <ALG>   Signing algorithm: HS256, HS384, HS512 [default: HS256]
    -c, --config <FILE>     Path to configuration file (JSON)
    -t, --token <TOKEN>     Existing session token
    -k, --key <KEY>         Session key
    -v, --value <VALUE>     Value to write (JSON, or a plain string)
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    JWT_SESSION_SECRET      Signing secret (overrides config)
    JWT_SESSION_ALGORITHM   Signing algorithm (overrides config)
    JWT_SESSION_LOG_LEVEL   Log level (overrides config)
    RUST_LOG                Alternative log level setting

EXAMPLES:
    # Start a session
    jwt-session -s my-secret write -k user -v '"alice"'

    # Add a key to an existing session
    jwt-session -s my-secret write -t <TOKEN> -k cart -v '[1, 2]'

    # Read one key back
    jwt-session -s my-secret read -t <TOKEN> -k user
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("jwt-session {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Command name not recognized.
    UnknownCommand(String),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::UnknownCommand(name) => {
                write!(f, "unknown command: '{}' (expected 'read' or 'write')", name)
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}

impl From<ArgsError> for JwtSessionError {
    fn from(e: ArgsError) -> Self {
        Self::Args(e.to_string())
    }
}
