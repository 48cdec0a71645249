//! Typed status and variant enums for components that would otherwise
//! branch on free-form strings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Progress state of a single step in a multi-step flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The step has been finished.
    Complete,
    /// The step is the active one.
    Current,
    /// The step has not been reached yet.
    Upcoming,
}

impl StepStatus {
    /// Returns the string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Current => "current",
            Self::Upcoming => "upcoming",
        }
    }

    /// Derives the status of the step at `index` given the active step.
    pub fn for_index(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Complete,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    /// Returns whether the step can be navigated back to.
    pub fn is_reachable(&self) -> bool {
        !matches!(self, Self::Upcoming)
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StepStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(Self::Complete),
            "current" => Ok(Self::Current),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(AppError::validation(format!("Unknown step status '{other}'"))),
        }
    }
}

/// Visual flavour of a loading indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderVariant {
    /// Rotating spinner.
    #[default]
    Spinner,
    /// Pulsing dots.
    Dots,
    /// Indeterminate progress bar.
    Bar,
}

impl LoaderVariant {
    /// Returns the string name of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::Dots => "dots",
            Self::Bar => "bar",
        }
    }
}

impl std::fmt::Display for LoaderVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LoaderVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spinner" => Ok(Self::Spinner),
            "dots" => Ok(Self::Dots),
            "bar" => Ok(Self::Bar),
            other => Err(AppError::validation(format!("Unknown loader variant '{other}'"))),
        }
    }
}
