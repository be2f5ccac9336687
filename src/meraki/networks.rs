//! Network data model and API operations

use log::debug;
use serde::Deserialize;

use crate::config::api;
use crate::error::Result;

use super::client::MerakiClient;
use super::organizations::string_or_number;
use super::traits::NamedResource;

/// Network record from the dashboard; belongs to exactly one organization
#[derive(Deserialize, Debug, Clone)]
pub struct Network {
    pub id: String,
    pub name: String,
    #[serde(rename = "organizationId", deserialize_with = "string_or_number")]
    pub organization_id: String,
}

impl NamedResource for Network {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl MerakiClient {
    /// Get all networks configured under an organization
    pub async fn get_networks(&self, organization_id: &str) -> Result<Vec<Network>> {
        debug!("Fetching networks for organization {}", organization_id);
        let path = format!(
            "/{}/{}/{}",
            api::ORGANIZATIONS,
            organization_id,
            api::NETWORKS
        );
        self.get_list(&path, "networks").await
    }
}
