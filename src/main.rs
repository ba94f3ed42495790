#![windows_subsystem = "windows"]
#![cfg_attr(not(windows), allow(dead_code))]

mod app;
mod cli;
#[cfg(windows)]
mod com;
mod config;
mod error;
mod log;
mod report;
mod shell;
mod util;

#[cfg(windows)]
fn main() {
    let config = config::Config::load();
    log::init(&config);

    let command_line = com::command_line();
    debug_log!("Command line: {}", command_line);

    // The apartment is released inside run(), before exit skips destructors.
    let exit_code = app::run(&com::WindowsHost, &command_line);
    debug_log!("Exit code: {}", exit_code);
    std::process::exit(exit_code);
}

#[cfg(not(windows))]
fn main() {
    eprintln!("exec-in-explorer launches programs through the Windows shell and only runs on Windows");
    std::process::exit(1);
}
