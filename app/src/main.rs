//! FILENAME: app/src/main.rs
// PURPOSE: Command-line entry point.

fn main() -> std::process::ExitCode {
    app_lib::run()
}
