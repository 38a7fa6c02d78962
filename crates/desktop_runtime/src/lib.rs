//! Desktop runtime: window registry, casino ledger, takeover phases, and the shell UI that
//! renders them.
//!
//! State changes flow through [`reduce_desktop`]; side effects it requests are queued as
//! [`RuntimeEffect`] values and executed by the shell.

pub mod apps;
pub mod components;
mod effect_executor;
pub mod explosion;
pub mod ledger;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::action_for_command;
