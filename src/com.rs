//! Shell automation over COM.
//!
//! Windows implementations of the [`crate::shell`] traits and of
//! [`crate::app::Host`]. Interfaces are reference counted by the `windows`
//! wrappers and released on drop; the apartment is released by [`Apartment`].

use windows::core::*;
use windows::Win32::System::Com::*;
use windows::Win32::System::Environment::GetCommandLineW;
use windows::Win32::System::Variant::VARIANT;
use windows::Win32::UI::Shell::*;

use crate::app::Host;
use crate::debug_log;
use crate::error::{Failure, LaunchError, E_FAIL};
use crate::report;
use crate::shell::{self, DesktopView, ShellDispatch};

/// Raw command line of this process, unsplit.
pub fn command_line() -> String {
    unsafe { String::from_utf16_lossy(GetCommandLineW().as_wide()) }
}

fn unsupported(step: &'static str) -> impl FnOnce(Error) -> LaunchError {
    move |err| {
        debug_log!("{} failed: {:?}", step, err);
        LaunchError::InterfaceUnsupported {
            step,
            failure: err.into(),
        }
    }
}

/// `FindWindowSW` reports a missing desktop as `S_FALSE` with no dispatch;
/// every outcome other than a dispatch object is treated the same way.
fn desktop_not_found(err: Error) -> LaunchError {
    debug_log!("FindWindowSW: {:?}", err);
    LaunchError::NotFound(Failure::from_code(E_FAIL))
}

/// Single-threaded apartment for the lifetime of the value.
pub struct Apartment(());

impl Apartment {
    pub fn init() -> std::result::Result<Self, LaunchError> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED | COINIT_DISABLE_OLE1DDE) }
            .ok()
            .map_err(|err| LaunchError::ComInit(err.into()))?;
        debug_log!("COM initialized");
        Ok(Self(()))
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
        debug_log!("COM uninitialized");
    }
}

pub struct DesktopShell {
    shell_windows: IShellWindows,
}

impl DesktopShell {
    pub fn connect() -> std::result::Result<Self, LaunchError> {
        let shell_windows: IShellWindows =
            unsafe { CoCreateInstance(&ShellWindows, None, CLSCTX_LOCAL_SERVER) }
                .map_err(|err| LaunchError::ServiceUnavailable(err.into()))?;
        Ok(Self { shell_windows })
    }

    /// Automation object of the window flagged as the desktop.
    fn find_desktop(&self) -> std::result::Result<IDispatch, LaunchError> {
        let empty = VARIANT::default();
        let mut hwnd = 0i32;
        unsafe {
            self.shell_windows.FindWindowSW(
                &empty,
                &empty,
                SWC_DESKTOP,
                &mut hwnd,
                SWFO_NEEDDISPATCH,
            )
        }
        .map_err(desktop_not_found)
    }
}

fn top_level_browser(dispatch: &IDispatch) -> std::result::Result<IShellBrowser, LaunchError> {
    let provider: IServiceProvider = dispatch.cast().map_err(unsupported("IServiceProvider"))?;
    unsafe { provider.QueryService::<IShellBrowser>(&SID_STopLevelBrowser) }
        .map_err(unsupported("IShellBrowser"))
}

impl shell::ShellWindows for DesktopShell {
    type View = ActiveView;

    fn desktop_view(&self) -> std::result::Result<ActiveView, LaunchError> {
        let dispatch = self.find_desktop()?;
        let browser = top_level_browser(&dispatch)?;
        let view = unsafe { browser.QueryActiveShellView() }.map_err(unsupported("IShellView"))?;
        Ok(ActiveView(view))
    }
}

pub struct ActiveView(IShellView);

impl ActiveView {
    /// The folder itself rather than any selected item.
    fn background(&self) -> std::result::Result<IShellFolderViewDual, LaunchError> {
        let background: IDispatch = unsafe { self.0.GetItemObject(SVGIO_BACKGROUND.0 as u32) }
            .map_err(unsupported("background item"))?;
        background.cast().map_err(unsupported("IShellFolderViewDual"))
    }
}

impl DesktopView for ActiveView {
    type Dispatch = ShellApplication;

    fn shell_dispatch(&self) -> std::result::Result<ShellApplication, LaunchError> {
        let folder = self.background()?;
        let application = unsafe { folder.Application() }.map_err(unsupported("Application"))?;
        let dispatch: IShellDispatch2 = application
            .cast()
            .map_err(unsupported("IShellDispatch2"))?;
        Ok(ShellApplication(dispatch))
    }
}

pub struct ShellApplication(IShellDispatch2);

impl ShellDispatch for ShellApplication {
    fn shell_execute(&self, file: &str, args: &str) -> std::result::Result<(), LaunchError> {
        let file = BSTR::from(file);
        let args = VARIANT::from(BSTR::from(args));
        let empty = VARIANT::default();
        unsafe { self.0.ShellExecute(&file, &args, &empty, &empty, &empty) }
            .map_err(|err| LaunchError::ExecutionFailed(err.into()))
    }
}

/// The real desktop session.
pub struct WindowsHost;

impl Host for WindowsHost {
    type Apartment = Apartment;
    type Shell = DesktopShell;

    fn init_com(&self) -> std::result::Result<Apartment, LaunchError> {
        Apartment::init()
    }

    fn connect(&self) -> std::result::Result<DesktopShell, LaunchError> {
        DesktopShell::connect()
    }

    fn show_error(&self, context: &str, err: &LaunchError) {
        report::show_error(context, err);
    }

    fn show_usage(&self) {
        report::show_usage();
    }
}
