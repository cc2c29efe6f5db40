//! Supported simulation backend identifiers.

use std::str::FromStr;

use thiserror::Error;

/// A backend selector string did not match any supported backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown simulation backend '{0}' (expected one of: isaaclab, isaacgym, genesis, pybullet, mujoco, sapien2, sapien3)")]
pub struct UnknownBackendError(pub String);

/// The fixed set of simulation backends a rollout can target.
///
/// Resolution of an identifier to an actual environment implementation is
/// the embedding application's job; this enum only fixes the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimBackend {
    /// NVIDIA Isaac Lab.
    IsaacLab,
    /// NVIDIA Isaac Gym (legacy).
    IsaacGym,
    /// Genesis.
    Genesis,
    /// PyBullet.
    Pybullet,
    /// MuJoCo.
    Mujoco,
    /// SAPIEN 2.x.
    Sapien2,
    /// SAPIEN 3.x.
    Sapien3,
}

impl SimBackend {
    /// Every supported backend.
    pub const ALL: [Self; 7] = [
        Self::IsaacLab,
        Self::IsaacGym,
        Self::Genesis,
        Self::Pybullet,
        Self::Mujoco,
        Self::Sapien2,
        Self::Sapien3,
    ];

    /// Canonical identifier string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IsaacLab => "isaaclab",
            Self::IsaacGym => "isaacgym",
            Self::Genesis => "genesis",
            Self::Pybullet => "pybullet",
            Self::Mujoco => "mujoco",
            Self::Sapien2 => "sapien2",
            Self::Sapien3 => "sapien3",
        }
    }
}

impl std::fmt::Display for SimBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimBackend {
    type Err = UnknownBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|backend| backend.as_str() == s)
            .ok_or_else(|| UnknownBackendError(s.to_string()))
    }
}
