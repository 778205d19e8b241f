//! jwt-session binary entry point.

use jwt_session::cli::{self, Args};
use jwt_session::{logging, Config};
use tracing::debug;

fn main() -> jwt_session::Result<()> {
    let args: Args = cli::parse_args()?;

    if args.help {
        cli::print_help();
        return Ok(());
    }

    if args.version {
        cli::print_version();
        return Ok(());
    }

    let config = Config::load(&args)?;
    logging::init(Some(config.log_filter()));
    debug!(command = ?args.command, "jwt-session v{}", env!("CARGO_PKG_VERSION"));

    if let Some(output) = cli::run(&args, &config)? {
        println!("{}", output);
    }

    Ok(())
}
