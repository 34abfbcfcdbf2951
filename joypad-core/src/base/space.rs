//! Action spaces.
use serde::{Deserialize, Serialize};

/// A discrete action space with `n` actions, indexed by `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Discrete {
    n: usize,
}

impl Discrete {
    /// Constructs a discrete space of `n` actions.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Returns the number of actions.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns `true` if `ix` is a valid action index.
    pub fn contains(&self, ix: usize) -> bool {
        ix < self.n
    }
}

/// Action space exposed by an [`Env`](crate::Env).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionSpace {
    /// One of `n` actions.
    Discrete(Discrete),

    /// A word of `n` independent on/off bits.
    MultiBinary(usize),
}

impl ActionSpace {
    /// Returns the discrete space, if this is one.
    pub fn as_discrete(&self) -> Option<&Discrete> {
        match self {
            Self::Discrete(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Discrete> for ActionSpace {
    fn from(d: Discrete) -> Self {
        Self::Discrete(d)
    }
}
