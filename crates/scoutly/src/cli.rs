//! Clap derive structures for the `scoutly` CLI.
//!
//! Defines the command tree, global flags, and shared argument groups.
//! Categorical filters stay as strings here and are parsed by the command
//! handlers, so this file only depends on clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// scoutly -- browse and curate scouting data from the command line
#[derive(Debug, Parser)]
#[command(
    name = "scoutly",
    version,
    about = "Browse players, coaches, shortlists and reports on a Scoutly deployment",
    long_about = "Command-line client for the Scoutly scouting platform.\n\n\
        List views are paginated server-side; use --page to move through\n\
        results or --all to walk every page.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Deployment profile to use
    #[arg(long, short = 'p', env = "SCOUTLY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, env = "SCOUTLY_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides profile and keyring)
    #[arg(long, env = "SCOUTLY_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SCOUTLY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "SCOUTLY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Rows per page, 1-100 (overrides profile)
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub page_size: Option<u32>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse and edit players
    #[command(alias = "pl")]
    Players(PlayersArgs),

    /// Browse and edit coaches
    #[command(alias = "co")]
    Coaches(CoachesArgs),

    /// Manage shortlists and their entries
    #[command(alias = "sl")]
    Shortlists(ShortlistsArgs),

    /// Generate and download reports
    #[command(alias = "rep")]
    Reports(ReportsArgs),

    /// Show the signed-in user
    #[command(alias = "whoami")]
    Me {
        /// Refresh the profile from the identity provider first
        #[arg(long)]
        sync: bool,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Paging, search and sorting shared by every list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page to show, starting at 1
    #[arg(
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,

    /// Walk every page instead of one
    #[arg(long, conflicts_with = "page")]
    pub all: bool,

    /// Free-text search
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort key (ignored by resources without server-side sorting)
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Name,
    Rating,
    /// Market value for players, salary for coaches
    Value,
    Created,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PLAYERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PlayersArgs {
    #[command(subcommand)]
    pub command: PlayersCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlayersCommand {
    /// List players
    #[command(alias = "ls")]
    List(PlayerListArgs),

    /// Show a player and similar profiles
    Get {
        /// Player ID
        id: String,

        /// Skip the similar-players lookup
        #[arg(long)]
        no_similar: bool,
    },

    /// Create a player
    Create(PlayerCreateArgs),

    /// Update a player
    Update(PlayerUpdateArgs),

    /// Delete a player
    #[command(alias = "rm")]
    Delete {
        /// Player ID
        id: String,
    },

    /// Aggregate statistics across all players
    Stats,
}

#[derive(Debug, Args)]
pub struct PlayerListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Position code, e.g. ST or CB ("all" for any)
    #[arg(long)]
    pub position: Option<String>,

    /// Current club
    #[arg(long)]
    pub club: Option<String>,

    /// Nationality
    #[arg(long)]
    pub nationality: Option<String>,

    /// Minimum market value in EUR
    #[arg(long)]
    pub min_value: Option<u64>,

    /// Maximum market value in EUR
    #[arg(long)]
    pub max_value: Option<u64>,
}

#[derive(Debug, Args)]
pub struct PlayerCreateArgs {
    /// Read the full player payload from a JSON file
    #[arg(long, short = 'F', conflicts_with_all = ["name", "position"])]
    pub from_file: Option<PathBuf>,

    /// Display name
    #[arg(long, required_unless_present = "from_file")]
    pub name: Option<String>,

    /// Primary position code
    #[arg(long, required_unless_present = "from_file")]
    pub position: Option<String>,

    /// Current club
    #[arg(long)]
    pub club: Option<String>,

    /// Nationality
    #[arg(long)]
    pub nationality: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub born: Option<String>,

    /// Preferred foot: left, right or both
    #[arg(long)]
    pub foot: Option<String>,

    /// Market value in EUR
    #[arg(long)]
    pub value: Option<u64>,

    /// Overall rating, 1-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub rating: Option<u8>,

    /// Potential rating, 1-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub potential: Option<u8>,

    /// Scouting notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct PlayerUpdateArgs {
    /// Player ID
    pub id: String,

    /// Read the update payload from a JSON file
    #[arg(long, short = 'F')]
    pub from_file: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub club: Option<String>,

    #[arg(long)]
    pub value: Option<u64>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub rating: Option<u8>,

    #[arg(long)]
    pub notes: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COACHES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CoachesArgs {
    #[command(subcommand)]
    pub command: CoachesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CoachesCommand {
    /// List coaches
    #[command(alias = "ls")]
    List(CoachListArgs),

    /// Show a coach and similar profiles
    Get {
        /// Coach ID
        id: String,

        /// Skip the similar-coaches lookup
        #[arg(long)]
        no_similar: bool,
    },

    /// Create a coach
    Create(CoachCreateArgs),

    /// Update a coach
    Update(CoachUpdateArgs),

    /// Delete a coach
    #[command(alias = "rm")]
    Delete {
        /// Coach ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct CoachListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Role: head_coach, assistant or youth_coach ("all" for any)
    #[arg(long)]
    pub role: Option<String>,

    /// Current club
    #[arg(long)]
    pub club: Option<String>,

    /// Nationality
    #[arg(long)]
    pub nationality: Option<String>,

    /// Preferred formation, e.g. 4-3-3
    #[arg(long)]
    pub formation: Option<String>,
}

#[derive(Debug, Args)]
pub struct CoachCreateArgs {
    /// Read the full coach payload from a JSON file
    #[arg(long, short = 'F', conflicts_with = "name")]
    pub from_file: Option<PathBuf>,

    /// Display name
    #[arg(long, required_unless_present = "from_file")]
    pub name: Option<String>,

    /// Current club
    #[arg(long)]
    pub club: Option<String>,

    /// Nationality
    #[arg(long)]
    pub nationality: Option<String>,

    /// Role: head_coach, assistant or youth_coach
    #[arg(long)]
    pub role: Option<String>,

    /// Preferred formation
    #[arg(long)]
    pub formation: Option<String>,

    /// Level: amateur, semi_pro, professional or elite
    #[arg(long)]
    pub level: Option<String>,

    /// Years of coaching experience
    #[arg(long)]
    pub experience: Option<u32>,

    /// Overall rating, 1-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub rating: Option<u8>,

    /// Scouting notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct CoachUpdateArgs {
    /// Coach ID
    pub id: String,

    /// Read the update payload from a JSON file
    #[arg(long, short = 'F')]
    pub from_file: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub club: Option<String>,

    #[arg(long)]
    pub role: Option<String>,

    #[arg(long)]
    pub formation: Option<String>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub rating: Option<u8>,

    #[arg(long)]
    pub notes: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SHORTLISTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ShortlistsArgs {
    #[command(subcommand)]
    pub command: ShortlistsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShortlistsCommand {
    /// List shortlists
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Shortlist type: player or coach ("all" for any)
        #[arg(long = "type")]
        kind: Option<String>,
    },

    /// Show a shortlist and its entries
    Get {
        /// Shortlist ID
        id: String,
    },

    /// Create a shortlist
    Create {
        /// Shortlist name
        name: String,

        /// Shortlist type: player or coach
        #[arg(long = "type", default_value = "player")]
        kind: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Priority: low, medium, high or urgent
        #[arg(long)]
        priority: Option<String>,
    },

    /// Delete a shortlist
    #[command(alias = "rm")]
    Delete {
        /// Shortlist ID
        id: String,
    },

    /// Add a player or coach to a shortlist
    AddItem(AddItemArgs),

    /// Change an entry's status, priority or notes
    UpdateItem {
        /// Shortlist ID
        shortlist: String,

        /// Entry ID
        item: String,

        /// Entry status, e.g. watching or contacted
        #[arg(long)]
        status: Option<String>,

        /// Entry priority, 1-5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        priority: Option<u8>,

        /// Notes on the entry
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove an entry from a shortlist
    RemoveItem {
        /// Shortlist ID
        shortlist: String,

        /// Entry ID
        item: String,
    },
}

#[derive(Debug, Args)]
pub struct AddItemArgs {
    /// Shortlist ID
    pub shortlist: String,

    /// Player to add
    #[arg(long, conflicts_with = "coach", required_unless_present = "coach")]
    pub player: Option<String>,

    /// Coach to add
    #[arg(long)]
    pub coach: Option<String>,

    /// Entry priority, 1-5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub priority: Option<u8>,

    /// Notes on the entry
    #[arg(long)]
    pub notes: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REPORTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ReportsArgs {
    #[command(subcommand)]
    pub command: ReportsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReportsCommand {
    /// List reports
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Report type, e.g. player_scout ("all" for any)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Generation status, e.g. completed
        #[arg(long)]
        status: Option<String>,
    },

    /// Show a report
    Get {
        /// Report ID
        id: String,
    },

    /// Request generation of a report
    Create {
        /// Report title
        title: String,

        /// Report type: player_scout, coach_analysis, shortlist_summary or comparison
        #[arg(long = "type")]
        kind: String,

        /// Generation parameter as key=value (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Delete a report
    #[command(alias = "rm")]
    Delete {
        /// Report ID
        id: String,
    },

    /// Resolve the download link of a completed report
    Download {
        /// Report ID
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current configuration (secrets redacted)
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a bearer token in the system keyring
    SetToken {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
