//! Wizard step cursor.

use crate::error::{Result, SupportError};
use serde::{Deserialize, Serialize};

/// The page of the three-step wizard currently shown.
///
/// Purely a presentation cursor: moving between steps never validates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    /// Restaurant identity and contact
    #[default]
    Identity,
    /// Issue categories and "Outros" detail
    Problem,
    /// Description, urgency flags and attachments
    Details,
}

impl WizardStep {
    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Problem => 2,
            Self::Details => 3,
        }
    }

    /// Step for a 1-based number.
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::Identity),
            2 => Ok(Self::Problem),
            3 => Ok(Self::Details),
            other => Err(SupportError::InvalidStep(other)),
        }
    }

    /// Following step; stays on the last one.
    pub fn next(self) -> Self {
        match self {
            Self::Identity => Self::Problem,
            Self::Problem | Self::Details => Self::Details,
        }
    }

    /// Preceding step; stays on the first one.
    pub fn previous(self) -> Self {
        match self {
            Self::Identity | Self::Problem => Self::Identity,
            Self::Details => Self::Problem,
        }
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = SupportError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_number(value)
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}
