//! Organization data model and API operations

use log::debug;
use serde::{Deserialize, Deserializer};

use crate::config::api;
use crate::error::Result;

use super::client::MerakiClient;
use super::traits::NamedResource;

/// Organization record from the dashboard.
///
/// Root of the hierarchy; one API key may see several.
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
}

impl NamedResource for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The dashboard serves organization ids as bare numbers
/// (`{"id":530205,"name":"WWT"}`); everything downstream treats them as
/// opaque strings.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::Number(n) => Ok(n.to_string()),
    }
}

impl MerakiClient {
    /// Get all organizations accessible to the API key
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        debug!("Fetching organizations");
        let path = format!("/{}", api::ORGANIZATIONS);
        self.get_list(&path, "organizations").await
    }
}
