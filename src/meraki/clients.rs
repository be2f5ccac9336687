//! End-host client data model and API operations

use log::debug;
use serde::Deserialize;

use crate::config::{api, limits};
use crate::error::Result;

use super::client::MerakiClient;

/// End-host seen by a device within the queried timespan.
///
/// The same physical client may appear under multiple devices across
/// repeated queries with different timespans; that is expected.
#[derive(Deserialize, Debug, Clone)]
pub struct EndClient {
    pub mac: String,
    /// May be null on the wire; normalize with [`EndClient::description`]
    pub description: Option<String>,
    #[serde(rename = "dhcpHostname")]
    pub dhcp_hostname: String,
    pub ip: String,
}

impl EndClient {
    /// Description with null normalized to the empty string
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl MerakiClient {
    /// Get clients associated with a device serial for a lookback window.
    ///
    /// The dashboard rejects windows over 30 days, so the timespan is
    /// clamped before the query string is built.
    pub async fn get_clients(&self, serial: &str, timespan: u64) -> Result<Vec<EndClient>> {
        let timespan = timespan.min(limits::MAX_TIMESPAN_SECS);
        debug!("Fetching clients for device {} (timespan {})", serial, timespan);
        let path = format!(
            "/{}/{}/{}?timespan={}",
            api::DEVICES,
            serial,
            api::CLIENTS,
            timespan
        );
        self.get_list(&path, "clients").await
    }
}
