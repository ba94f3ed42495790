//! Whole-program run: initialise COM, parse, launch, report, pick an exit code.

use crate::cli::{self, Target};
use crate::debug_log;
use crate::error::LaunchError;
use crate::report;
use crate::shell::{self, ShellWindows};

pub const EXIT_SUCCESS: i32 = 0;

/// Platform services the run needs.
pub trait Host {
    /// Held for the rest of the run; dropping it tears COM down.
    type Apartment;
    type Shell: ShellWindows;

    fn init_com(&self) -> Result<Self::Apartment, LaunchError>;
    fn connect(&self) -> Result<Self::Shell, LaunchError>;
    fn show_error(&self, context: &str, err: &LaunchError);
    fn show_usage(&self);
}

fn launch<H: Host>(host: &H, target: &Target) -> Result<(), LaunchError> {
    let shell = host.connect()?;
    shell::exec_in_explorer(&shell, target)
}

/// Run once against `command_line` (the full line, own program name
/// included) and return the process exit code.
pub fn run<H: Host>(host: &H, command_line: &str) -> i32 {
    let _apartment = match host.init_com() {
        Ok(apartment) => apartment,
        Err(err) => {
            host.show_error(report::COM_INIT_CONTEXT, &err);
            return err.exit_code();
        }
    };

    let Some(target) = cli::target_from_command_line(command_line) else {
        debug_log!("No target in command line: {}", command_line);
        host.show_usage();
        return LaunchError::NoTarget.exit_code();
    };
    debug_log!("Target: cmd[{}] args[{}]", target.exe, target.args);

    match launch(host, &target) {
        Ok(()) => {
            debug_log!("Launched through explorer");
            EXIT_SUCCESS
        }
        Err(err) => {
            host.show_error(&report::execute_context(&target), &err);
            err.exit_code()
        }
    }
}
