use crate::commands::Commands;

use kb_core::Viewer;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kb")]
#[command(about = "Kanban task board client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Bearer token (overrides api.token from config)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Acting user; members may only move tasks assigned to them
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Act as the project owner
    #[arg(long, global = true)]
    pub owner: bool,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,
}

impl Cli {
    pub fn viewer(&self) -> Viewer {
        Viewer {
            user_id: self.user_id.clone(),
            is_owner: self.owner,
        }
    }
}
