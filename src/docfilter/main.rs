//! # Docfilter CLI
//!
//! The binary is intentionally thin: argument parsing, I/O and rendering live
//! in `cli/`, while this file only invokes `cli::run()` and handles process
//! termination. Everything the CLI does goes through [`docfilter::api`].

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
