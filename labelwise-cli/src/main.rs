//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn main() {
    if let Err(err) = labelwise_cli::run() {
        eprintln!("labelwise: {err}");
        std::process::exit(1);
    }
}
