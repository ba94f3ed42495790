//! Shell automation pipeline.
//!
//! Launching through explorer is a chain of capability steps: the shell
//! window collection yields the desktop's active view, the view yields the
//! shell application's dispatch object, and that object executes the target.
//! Each step is a trait so the chain can run against a fake shell.

use crate::cli::Target;
use crate::debug_log;
use crate::error::LaunchError;

/// Collection of open shell windows.
pub trait ShellWindows {
    type View: DesktopView;

    /// Active view of the desktop window.
    fn desktop_view(&self) -> Result<Self::View, LaunchError>;
}

/// Active shell view of the desktop.
pub trait DesktopView {
    type Dispatch: ShellDispatch;

    /// Walk from the view's background item to the shell application object.
    fn shell_dispatch(&self) -> Result<Self::Dispatch, LaunchError>;
}

/// Shell application automation object that can execute files.
pub trait ShellDispatch {
    /// Ask the shell process to launch `file` with `args`. Returns once the
    /// shell accepted the request; the child is not waited on.
    fn shell_execute(&self, file: &str, args: &str) -> Result<(), LaunchError>;
}

/// Run the whole chain against an already connected shell.
pub fn exec_in_explorer<S: ShellWindows>(shell: &S, target: &Target) -> Result<(), LaunchError> {
    debug_log!("Locating desktop view");
    let view = shell.desktop_view()?;

    debug_log!("Resolving shell dispatch");
    let dispatch = view.shell_dispatch()?;

    debug_log!("ShellExecute cmd[{}] args[{}]", target.exe, target.args);
    dispatch.shell_execute(&target.exe, &target.args)
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory shell used by the pipeline and driver tests.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        ComInit,
        ComTeardown,
        Connect,
        DesktopView,
        ShellDispatch,
        Execute(String, String),
        Error(String),
        Usage,
    }

    pub type Recorder = Rc<RefCell<Vec<Event>>>;

    /// Which step, if any, fails and how.
    #[derive(Debug, Clone, Default)]
    pub struct Script {
        pub connect: Option<LaunchError>,
        pub desktop_view: Option<LaunchError>,
        pub shell_dispatch: Option<LaunchError>,
        pub execute: Option<LaunchError>,
    }

    fn step(result: &Option<LaunchError>) -> Result<(), LaunchError> {
        match result {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    #[derive(Clone)]
    pub struct FakeShell {
        pub events: Recorder,
        pub script: Rc<Script>,
    }

    impl FakeShell {
        pub fn new(events: Recorder, script: Script) -> Self {
            Self {
                events,
                script: Rc::new(script),
            }
        }

        fn record(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }
    }

    impl ShellWindows for FakeShell {
        type View = FakeShell;

        fn desktop_view(&self) -> Result<Self::View, LaunchError> {
            self.record(Event::DesktopView);
            step(&self.script.desktop_view)?;
            Ok(self.clone())
        }
    }

    impl DesktopView for FakeShell {
        type Dispatch = FakeShell;

        fn shell_dispatch(&self) -> Result<Self::Dispatch, LaunchError> {
            self.record(Event::ShellDispatch);
            step(&self.script.shell_dispatch)?;
            Ok(self.clone())
        }
    }

    impl ShellDispatch for FakeShell {
        fn shell_execute(&self, file: &str, args: &str) -> Result<(), LaunchError> {
            self.record(Event::Execute(file.into(), args.into()));
            step(&self.script.execute)
        }
    }
}
