use serde::{Deserialize, Serialize};

pub const INITIAL_Z_INDEX: u32 = 1;
pub const INITIAL_CASINO_BALANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    Terminal,
    ChatGbt,
    Casino,
}

impl AppId {
    pub const ALL: [AppId; 3] = [Self::Terminal, Self::ChatGbt, Self::Casino];

    /// Manifest id used by the build-time app catalog.
    pub fn manifest_id(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::ChatGbt => "chatgbt",
            Self::Casino => "casino",
        }
    }

    pub fn from_manifest_id(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.manifest_id() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Full-screen takeover phase. Only ever moves forward within a session.
pub enum GamePhase {
    #[default]
    Normal,
    Exploding,
    Dino,
}

impl GamePhase {
    fn rank(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Exploding => 1,
            Self::Dino => 2,
        }
    }

    /// Whether moving from `self` to `next` respects the one-directional ordering.
    pub fn can_advance_to(self, next: GamePhase) -> bool {
        next.rank() > self.rank()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub z_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
    pub focused_window_id: Option<WindowId>,
    pub z_index_counter: u32,
    pub casino_balance: f64,
    pub has_played_casino: bool,
    pub game_phase: GamePhase,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            focused_window_id: None,
            z_index_counter: INITIAL_Z_INDEX,
            casino_balance: INITIAL_CASINO_BALANCE,
            has_played_casino: false,
            game_phase: GamePhase::Normal,
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    /// The window presented to the user: the most recently opened or focused one.
    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    pub fn is_focused(&self, window_id: WindowId) -> bool {
        self.focused_window_id == Some(window_id)
    }
}
