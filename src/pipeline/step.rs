//! Step identifiers and the action alias table.

use crate::error::{Result, ShipError};

/// The closed set of pipeline actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Prepare the output directory, deleting leftovers from prior runs.
    Cleanup,
    /// Build the disk image with create-dmg.
    Package,
    /// Codesign the image and submit it for notarization.
    Notarize,
    /// Staple the notarization ticket and validate it.
    Staple,
    /// Regenerate the Sparkle update feed.
    Appcast,
}

/// Accepted spellings per action. Matching is case-sensitive and exact;
/// no fuzzy or partial matching.
const ALIASES: &[(&str, Action)] = &[
    ("cleanup", Action::Cleanup),
    ("clean", Action::Cleanup),
    ("package", Action::Package),
    ("dmg", Action::Package),
    ("sign-and-notarize", Action::Notarize),
    ("notarize", Action::Notarize),
    ("sign", Action::Notarize),
    ("staple-and-validate", Action::Staple),
    ("staple", Action::Staple),
    ("publish-feed", Action::Appcast),
    ("appcast", Action::Appcast),
    ("feed", Action::Appcast),
];

impl Action {
    /// Resolves a configured identifier to its action.
    pub fn resolve(name: &str) -> Result<Action> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, action)| *action)
            .ok_or_else(|| ShipError::UnknownStep {
                name: name.to_string(),
            })
    }

    /// Canonical label used in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Cleanup => "cleanup",
            Action::Package => "package",
            Action::Notarize => "notarize",
            Action::Staple => "staple",
            Action::Appcast => "appcast",
        }
    }
}

/// One resolved entry of the configured step list: the spelling the
/// operator used plus the action it maps to.
#[derive(Debug, Clone)]
pub struct Step {
    pub name: String,
    pub action: Action,
}

/// Resolves the whole step list up front, before anything executes, so
/// a typo late in the list cannot surface after earlier steps have
/// already taken effect.
pub fn resolve_steps(names: &[String]) -> Result<Vec<Step>> {
    names
        .iter()
        .map(|name| {
            Ok(Step {
                name: name.clone(),
                action: Action::resolve(name)?,
            })
        })
        .collect()
}
