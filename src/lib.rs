pub use self::error::{Error, Result};
pub use self::remover::{
    BackgroundRemover, Summary, THRESHOLD, TRANSPARENT_WHITE, clear_near_white, is_near_white,
    remove_white_background,
};

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

mod error;
mod remover;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Image file to rewrite in place
    #[arg()]
    file: PathBuf,
    /// Verbose messages
    #[arg(short('v'), long, default_value_t = false)]
    verbose: bool,
}

/// Parse command line arguments and process the named file
///
/// Processing failures are printed and swallowed, only argument errors leave through clap
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::parse_from(args);
    init_logging(args.verbose);
    println!("Processing {}...", args.file.display());
    let remover = BackgroundRemover::new(args.file).with_verbose(args.verbose);
    match remover.process() {
        Ok(summary) => {
            log::debug!("{summary:?}");
            println!("Success: Background removed.");
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

/// Send log records to stderr, RUST_LOG wins over the verbose flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    env_logger::Builder::from_env(env).try_init().ok();
}
