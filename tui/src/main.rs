mod args;
mod cli;
mod format;
#[cfg(feature = "tui")]
mod tui;

fn main() {
    env_logger::init();
    let args = args::Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = cli::run(args) {
        cli::failure(e).exit();
    }
}
