//! Meraki dashboard API client module
//!
//! Provides the HTTP client, typed entity models for the four-level
//! hierarchy, the discovery walk, and the VLAN provisioning workflow.

mod client;
pub mod clients;
pub mod devices;
pub mod discovery;
pub mod networks;
pub mod organizations;
pub mod traits;
pub mod vlans;

pub use client::{MerakiClient, PostOutcome};
pub use clients::EndClient;
pub use devices::Device;
pub use discovery::{
    locate_clients, matches_filter, ClientInfo, CompositeRecord, DiscoveryParams, DiscoveryReport,
};
pub use networks::Network;
pub use organizations::Organization;
pub use traits::{resolve_id, NamedResource};
pub use vlans::{create_vlan, resolve_network_id, Vlan, VlanRequest, SUCCESSFUL_POST_STATUS};
