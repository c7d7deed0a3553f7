//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = golf_router_cli::run() {
        eprintln!("golf-router: {err}");
        std::process::exit(1);
    }
}
