//! Entry point for the `feast` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = feast_cli::run() {
        eprintln!("feast: {err}");
        std::process::exit(1);
    }
}
