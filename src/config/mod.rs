#[cfg(feature = "cli")]
pub mod cli;
pub mod preview_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, LinkTargetKind};
pub use preview_config::PreviewConfig;
