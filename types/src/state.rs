use std::fmt;

use serde::{Deserialize, Serialize};

/// Nominal lifecycle flag for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Init,
    Running,
    Stopped,
}

impl State {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            State::Init => 0,
            State::Running => 1,
            State::Stopped => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            State::Init => "init",
            State::Running => "running",
            State::Stopped => "stopped",
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(State::Init),
            1 => Some(State::Running),
            2 => Some(State::Stopped),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
