use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkTargetKind {
    /// Links configured on the displayed field value
    Field,
    /// Links configured on the panel itself
    Panel,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "link-preview")]
#[command(about = "Resolve panel and field data links from a preview document")]
pub struct CliConfig {
    #[arg(long, help = "Path to the TOML preview document")]
    pub config: PathBuf,

    #[arg(long, value_enum, default_value = "field")]
    pub target: LinkTargetKind,

    #[arg(long, help = "Print resolved links as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
