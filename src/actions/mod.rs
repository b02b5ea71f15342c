//! The fixed set of pipeline actions.
//!
//! Each action is a pure function of the configuration and the injected
//! capabilities: it pulls only the configuration fields it needs,
//! translates them into one external tool's argument contract, and
//! treats any non-zero exit as fatal for the whole run.

pub mod appcast;
pub mod cleanup;
pub mod notarize;
pub mod package;
pub mod staple;
