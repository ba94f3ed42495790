//! Error and usage messages.
//!
//! Text is composed here; [`show_error`] and [`show_usage`] put it in a
//! modal message box and block until it is dismissed.

use std::path::Path;

use crate::cli::Target;
use crate::error::{Failure, LaunchError};
use crate::util::file_name;

pub const ERROR_CAPTION: &str = "Error";
pub const USAGE_CAPTION: &str = "Usage";
pub const COM_INIT_CONTEXT: &str = "Failed to initialize COM.";
pub const NO_DESCRIPTION: &str = "Error description not available.";
const MODULE_PLACEHOLDER: &str = "exec-in-explorer.exe";

/// Human text for a failure: the COM description if there is one, then the
/// system message for the code, then a fixed placeholder.
pub fn describe(failure: &Failure, system_message: impl Fn(i32) -> Option<String>) -> String {
    if failure.code >= 0 {
        return "No error.".to_string();
    }
    if let Some(description) = &failure.description {
        return description.clone();
    }
    system_message(failure.code)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

pub fn execute_context(target: &Target) -> String {
    format!("Failed to execute cmd[{}] args[{}]", target.exe, target.args)
}

pub fn error_text(
    context: &str,
    err: &LaunchError,
    system_message: impl Fn(i32) -> Option<String>,
) -> String {
    let description = match err.failure() {
        Some(failure) => describe(failure, system_message),
        None => err.to_string(),
    };
    format!("{}\n\n{}", context, description)
}

pub fn usage_text(module_path: Option<&Path>) -> String {
    let path = module_path.map(|p| p.to_string_lossy().into_owned());
    let name = path
        .as_deref()
        .map(file_name)
        .filter(|n| !n.is_empty())
        .unwrap_or(MODULE_PLACEHOLDER);
    format!("Usage: {} <cmd> <args>", name)
}

#[cfg(windows)]
pub fn system_message(code: i32) -> Option<String> {
    let message = windows::core::HRESULT(code).message();
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}

#[cfg(windows)]
fn message_box(text: &str, caption: &str, icon: windows::Win32::UI::WindowsAndMessaging::MESSAGEBOX_STYLE) {
    use windows::core::PCWSTR;
    use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_OK};

    use crate::util::encode_wide;

    let text = encode_wide(text);
    let caption = encode_wide(caption);
    unsafe {
        let _ = MessageBoxW(
            None,
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_OK | icon,
        );
    }
}

#[cfg(windows)]
pub fn show_error(context: &str, err: &LaunchError) {
    use windows::Win32::UI::WindowsAndMessaging::MB_ICONERROR;

    crate::debug_log!("{}: {}", context, err);
    message_box(&error_text(context, err, system_message), ERROR_CAPTION, MB_ICONERROR);
}

#[cfg(windows)]
pub fn show_usage() {
    use windows::Win32::UI::WindowsAndMessaging::MB_ICONINFORMATION;

    let exe = std::env::current_exe().ok();
    message_box(&usage_text(exe.as_deref()), USAGE_CAPTION, MB_ICONINFORMATION);
}
