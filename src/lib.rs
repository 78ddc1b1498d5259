#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::missing_safety_doc)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod hooks;
pub mod installer;
pub mod paths;
pub mod writer;

pub use crate::config::HookConfig;
pub use crate::error::{
    HookError,
    HookResult,
};
pub use crate::hooks::{
    GIT_HOOK_NAMES,
    is_valid_hook_name,
};
pub use crate::installer::{
    DEFAULT_UPDATE_CHECK_SCRIPT,
    HookSource,
    HookSpec,
    InstallReport,
    InstalledHook,
    Installer,
    SkippedHook,
};
pub use crate::writer::HookWriter;
