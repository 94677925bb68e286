mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cadv", version, about = "CAD document registry and snapshot vault")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Register a CAD file, or fold in its changes if already known
    Register(RegisterArgs),

    /// Reconcile watch folders against the registry
    Sync(SyncArgs),

    /// Run the filesystem watch daemon in the foreground
    Watch,

    /// List documents, optionally filtered by kind and status
    List(ListArgs),

    /// Show the most recently modified documents
    Recent(RecentArgs),

    /// Show one document with its revisions and audit log
    Show(ShowArgs),

    /// Change a document's lifecycle status
    Status(StatusArgs),

    /// Record a formal revision of a document
    Revision(RevisionArgs),

    /// Manage watch folders
    #[command(subcommand)]
    Folders(FoldersCommand),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Path to the CAD file
    pub path: PathBuf,

    /// ERP project to link the document to
    #[arg(long)]
    pub project: Option<i64>,
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Sync a single folder by id instead of all active folders
    #[arg(long)]
    pub folder: Option<i64>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by kind: piece, assembly, drawing, bom, other
    #[arg(long)]
    pub kind: Option<String>,

    /// Filter by status: en_diseno, revision, aprobado, liberado, obsoleto
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by linked ERP project
    #[arg(long)]
    pub project: Option<i64>,

    #[arg(long)]
    pub limit: Option<u32>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RecentArgs {
    #[arg(long, default_value_t = 10)]
    pub limit: u32,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Document id or code (e.g. 12 or PZA-2026-0012)
    pub document: String,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Document id or code
    pub document: String,

    /// New status: en_diseno, revision, aprobado, liberado, obsoleto
    pub status: String,
}

#[derive(Debug, Args)]
pub struct RevisionArgs {
    /// Document id or code
    pub document: String,

    /// Note describing the change
    #[arg(long, short)]
    pub message: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum FoldersCommand {
    /// Register a folder for sync and watching
    Add {
        path: PathBuf,
        /// Authoring tool hint (e.g. solidworks, autocad)
        #[arg(long)]
        tool: Option<String>,
    },
    /// List all watch folders
    List,
    /// Re-enable a disabled folder
    Enable { id: i64 },
    /// Disable a folder without losing its registration
    Disable { id: i64 },
    /// Remove a folder registration entirely
    Remove { id: i64 },
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::Register(args) => cmd::register::run(config, profile, &args),
        Commands::Sync(args) => cmd::sync::run(config, profile, &args),
        Commands::Watch => cmd::watch::run(config, profile),
        Commands::List(args) => cmd::list::run(config, profile, &args),
        Commands::Recent(args) => cmd::recent::run(config, profile, &args),
        Commands::Show(args) => cmd::show::run(config, profile, &args),
        Commands::Status(args) => cmd::status::run(config, profile, &args),
        Commands::Revision(args) => cmd::revision::run(config, profile, &args),
        Commands::Folders(args) => cmd::folders::run(config, profile, args),
    }
}
