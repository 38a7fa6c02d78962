//! Shared contract types between the desktop runtime and the apps it hosts.
//!
//! Apps never touch the runtime reducer directly. They receive an [`AppServices`] bundle at mount
//! time and send [`AppCommand`] values through it; the runtime translates those into reducer
//! actions for the window they came from.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, SignalGet, SignalGetUntracked, View};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Transport commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Close the window hosting the sending app.
    CloseWindow,
    /// Add a signed amount to the shared casino balance (clamped at zero by the runtime).
    UpdateBalance {
        /// Signed balance change.
        delta: f64,
    },
    /// Record that the casino has been played at least once.
    MarkCasinoPlayed,
    /// Start the withdraw takeover sequence.
    TriggerExplosion,
}

#[derive(Clone, Copy)]
/// Window-scoped service for shell window integration APIs.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Requests that the runtime close the current window.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }
}

#[derive(Clone, Copy)]
/// Shared casino ledger: a reactive view of the balance plus the commands that mutate it.
pub struct LedgerService {
    sender: Callback<AppCommand>,
    balance: Signal<f64>,
    has_played: Signal<bool>,
}

impl LedgerService {
    /// Reactive balance read.
    pub fn balance(&self) -> f64 {
        self.balance.get()
    }

    /// Non-reactive balance read for event handlers.
    pub fn balance_untracked(&self) -> f64 {
        self.balance.get_untracked()
    }

    /// Reactive read of the "has played" flag.
    pub fn has_played(&self) -> bool {
        self.has_played.get()
    }

    /// Applies a signed change to the balance.
    pub fn update_balance(&self, delta: f64) {
        self.sender.call(AppCommand::UpdateBalance { delta });
    }

    /// Marks the casino as played.
    pub fn mark_played(&self) {
        self.sender.call(AppCommand::MarkCasinoPlayed);
    }

    /// Requests a withdrawal, which starts the takeover sequence.
    pub fn withdraw(&self) {
        self.sender.call(AppCommand::TriggerExplosion);
    }
}

#[derive(Clone, Copy)]
/// Injected app services bundle.
pub struct AppServices {
    /// Window integration service.
    pub window: WindowService,
    /// Casino ledger service.
    pub ledger: LedgerService,
}

impl AppServices {
    /// Creates service handles from the runtime command callback and ledger signals.
    pub fn new(
        sender: Callback<AppCommand>,
        balance: Signal<f64>,
        has_played: Signal<bool>,
    ) -> Self {
        Self {
            window: WindowService { sender },
            ledger: LedgerService {
                sender,
                balance,
                has_played,
            },
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}
