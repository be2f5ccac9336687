//! merakictl - Explore and provision a Meraki cloud-managed network
//!
//! A CLI tool to locate client machines across the organization →
//! network → device hierarchy and to create VLANs on a network.
//!
//! # Features
//!
//! - Walk every organization the API key can see and list its clients
//! - Filter clients by a substring of their description or MAC
//! - Create VLANs addressing organization and network by name
//! - Multiple output formats (table, CSV, JSON)
//!
//! # Example
//!
//! ```bash
//! # List every client seen in the last 30 days
//! merakictl discover
//!
//! # Find a laptop by description
//! merakictl discover -f wiz
//!
//! # Narrow the lookback window to 20 minutes
//! merakictl discover -f wiz -t 1200
//!
//! # Create a VLAN
//! merakictl vlan add --org WWT --network SWISSWOOD --vlan 64 \
//!     --name VLAN64 --appliance-ip 192.168.64.1 --subnet 192.168.64.0/24
//!
//! # Output as JSON
//! merakictl discover -o json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod meraki;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat, VlanCommand};
pub use commands::{run_discover_command, run_vlan_command};
pub use error::{MerakiError, Result};
pub use meraki::{
    create_vlan, locate_clients, resolve_id, CompositeRecord, Device, DiscoveryParams,
    DiscoveryReport, EndClient, MerakiClient, NamedResource, Network, Organization, PostOutcome,
    Vlan, VlanRequest,
};
pub use output::{output_records, output_vlans};
