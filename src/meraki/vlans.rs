//! VLAN models and the provisioning workflow

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::{MerakiError, Result};

use super::client::{MerakiClient, PostOutcome};
use super::organizations::string_or_number;
use super::traits::resolve_id;

/// Status codes the dashboard uses to acknowledge a successful POST
pub const SUCCESSFUL_POST_STATUS: &[u16] = &[201];

/// Request body for VLAN creation. All fields are caller-supplied; the
/// dashboard does its own validation and reports errors in the response body.
#[derive(Serialize, Debug, Clone)]
pub struct VlanRequest {
    pub id: String,
    pub name: String,
    #[serde(rename = "applianceIp")]
    pub appliance_ip: String,
    pub subnet: String,
}

/// VLAN record from the dashboard
#[derive(Deserialize, Debug, Clone)]
pub struct Vlan {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "applianceIp")]
    pub appliance_ip: Option<String>,
    pub subnet: Option<String>,
    #[serde(rename = "networkId")]
    pub network_id: Option<String>,
}

impl MerakiClient {
    /// Get all VLANs configured on a network
    pub async fn get_vlans(&self, network_id: &str) -> Result<Vec<Vlan>> {
        debug!("Fetching VLANs for network {}", network_id);
        let path = format!("/{}/{}/{}", api::NETWORKS, network_id, api::VLANS);
        self.get_list(&path, "vlans").await
    }
}

/// Resolve an organization name and then a network name within it.
///
/// Each resolution failure is terminal: a missing organization means the
/// networks call is never issued.
pub async fn resolve_network_id(
    client: &MerakiClient,
    organization_name: &str,
    network_name: &str,
) -> Result<String> {
    let organizations = client.get_organizations().await?;
    let organization_id = resolve_id(&organizations, organization_name)
        .ok_or(MerakiError::NotFound {
            kind: "Organization",
            name: organization_name.to_string(),
        })?
        .to_string();
    debug!(
        "Resolved organization '{}' to id {}",
        organization_name, organization_id
    );

    let networks = client.get_networks(&organization_id).await?;
    let network_id = resolve_id(&networks, network_name)
        .ok_or(MerakiError::NotFound {
            kind: "Network",
            name: network_name.to_string(),
        })?
        .to_string();
    debug!("Resolved network '{}' to id {}", network_name, network_id);

    Ok(network_id)
}

/// Create a VLAN under a network, both addressed by name.
///
/// Succeeds only on an exact 201 from the dashboard; any other status comes
/// back as an error carrying the raw status code and response body. The
/// dashboard is not transactional, so a reported failure may still have
/// partially applied the change.
pub async fn create_vlan(
    client: &MerakiClient,
    organization_name: &str,
    network_name: &str,
    request: &VlanRequest,
) -> Result<PostOutcome> {
    let network_id = resolve_network_id(client, organization_name, network_name).await?;

    let path = format!("/{}/{}/{}", api::NETWORKS, network_id, api::VLANS);
    let outcome = client.post_json(&path, request).await?;

    if SUCCESSFUL_POST_STATUS.contains(&outcome.status) {
        Ok(outcome)
    } else {
        Err(MerakiError::Api {
            status: outcome.status,
            body: outcome.body,
        })
    }
}
