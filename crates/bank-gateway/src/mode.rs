use serde::{Deserialize, Serialize};

/// Where the gateway currently sends calls.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    ForcedMock,
    LiveUnknown,
    LiveAvailable,
    LiveUnavailable,
}

impl Mode {
    pub fn is_mock(&self) -> bool {
        matches!(self, Mode::ForcedMock | Mode::LiveUnavailable)
    }
}

/// Last known reachability of the live backend, independent of the override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Liveness {
    Unknown,
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ModeState {
    pub forced: bool,
    pub liveness: Liveness,
}

impl ModeState {
    pub fn new(forced: bool) -> Self {
        Self {
            forced,
            liveness: Liveness::Unknown,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.forced {
            return Mode::ForcedMock;
        }

        match self.liveness {
            Liveness::Unknown => Mode::LiveUnknown,
            Liveness::Available => Mode::LiveAvailable,
            Liveness::Unavailable => Mode::LiveUnavailable,
        }
    }

    pub fn info(&self) -> ModeInfo {
        ModeInfo {
            mode: self.mode(),
            forced_mock: self.forced,
            backend_available: match self.liveness {
                Liveness::Unknown => None,
                Liveness::Available => Some(true),
                Liveness::Unavailable => Some(false),
            },
        }
    }
}

/// Read-only snapshot for status widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    pub mode: Mode,
    pub forced_mock: bool,
    /// `None` until a probe or a live call has settled it.
    pub backend_available: Option<bool>,
}

impl ModeInfo {
    pub fn is_serving_mock(&self) -> bool {
        self.mode.is_mock()
    }
}
