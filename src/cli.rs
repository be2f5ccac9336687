//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::defaults;

/// Meraki dashboard CLI
#[derive(Parser, Debug)]
#[command(name = "merakictl")]
#[command(version)]
#[command(about = "Locate clients and provision VLANs on the Meraki dashboard", long_about = None)]
pub struct Cli {
    /// Dashboard API key
    #[arg(short = 'k', long, env = "MERAKI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Dashboard host
    #[arg(short = 'd', long, default_value = defaults::DASHBOARD)]
    pub dashboard: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Suppress progress spinners
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk organizations, networks and devices, listing matching clients
    Discover {
        /// Match this string against client description and MAC ("*" returns all)
        #[arg(short, long, default_value = defaults::SEARCH_FILTER)]
        filter: String,

        /// Lookback window in seconds (clamped to 30 days)
        #[arg(short, long, default_value_t = defaults::TIMESPAN_SECS)]
        timespan: u64,
    },
    /// Manage VLANs on a network
    Vlan {
        #[command(subcommand)]
        action: VlanCommand,
    },
}

/// VLAN actions
#[derive(Subcommand, Debug)]
pub enum VlanCommand {
    /// Create a VLAN on a network (organization and network by name)
    Add {
        /// Organization name
        #[arg(long)]
        org: String,

        /// Network name
        #[arg(long)]
        network: String,

        /// VLAN id
        #[arg(long)]
        vlan: String,

        /// VLAN name
        #[arg(long)]
        name: String,

        /// Appliance IP inside the new subnet
        #[arg(long)]
        appliance_ip: String,

        /// Subnet in CIDR notation
        #[arg(long)]
        subnet: String,
    },
    /// List VLANs configured on a network
    List {
        /// Organization name
        #[arg(long)]
        org: String,

        /// Network name
        #[arg(long)]
        network: String,
    },
    /// Remove a VLAN (not implemented upstream)
    Delete,
    /// Modify a VLAN (not implemented upstream)
    Update,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
