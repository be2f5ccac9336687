//! Device data model and API operations

use log::debug;
use serde::Deserialize;

use crate::config::api;
use crate::error::Result;

use super::client::MerakiClient;

/// Device record from the dashboard; addressed by serial, belongs to one network
#[derive(Deserialize, Debug, Clone)]
pub struct Device {
    pub serial: String,
    pub name: String,
}

impl MerakiClient {
    /// Get all devices in a network
    pub async fn get_devices(&self, network_id: &str) -> Result<Vec<Device>> {
        debug!("Fetching devices for network {}", network_id);
        let path = format!("/{}/{}/{}", api::NETWORKS, network_id, api::DEVICES);
        self.get_list(&path, "devices").await
    }
}
