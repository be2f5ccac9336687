//! Client discovery: walk the organization → network → device → client tree
//!
//! Locating clients means walking a tree rooted at the API key. The key is
//! associated with one or more organizations, an organization has networks,
//! each network has devices, and each device has seen zero or more clients
//! within the queried timespan. Larger timespans may show the same client
//! connected to multiple devices; small timespans may return nothing.

use futures::stream::{self, StreamExt};
use log::{debug, warn};
use serde::Serialize;

use crate::config::{defaults, limits};
use crate::error::{MerakiError, Result};

use super::client::MerakiClient;
use super::clients::EndClient;

/// Parameters for one discovery walk
#[derive(Debug, Clone)]
pub struct DiscoveryParams {
    /// Substring to match against client description and MAC; `*` matches all
    pub search_filter: String,
    /// Lookback window in seconds (clamped to 30 days at the transport layer)
    pub timespan: u64,
}

impl Default for DiscoveryParams {
    fn default() -> Self {
        Self {
            search_filter: defaults::SEARCH_FILTER.to_string(),
            timespan: defaults::TIMESPAN_SECS,
        }
    }
}

/// Client attributes carried in a [`CompositeRecord`]
#[derive(Serialize, Debug, Clone)]
pub struct ClientInfo {
    pub ip: String,
    pub mac: String,
    pub description: String,
    #[serde(rename = "dhcpHostname")]
    pub dhcp_hostname: String,
}

/// One matching client, flattened with the names of the three levels above it
#[derive(Serialize, Debug, Clone)]
pub struct CompositeRecord {
    pub organization: String,
    pub network: String,
    pub device: String,
    pub client: ClientInfo,
}

/// Result of a completed discovery walk
#[derive(Debug)]
pub struct DiscoveryReport {
    pub records: Vec<CompositeRecord>,
    /// Human-readable completion message ("Returned: N clients")
    pub message: String,
}

/// Match the search filter against a client's description and MAC.
///
/// `*` accepts everything; otherwise a case-sensitive substring match on the
/// null-normalized description or the MAC address.
pub fn matches_filter(filter: &str, end_client: &EndClient) -> bool {
    filter == defaults::SEARCH_FILTER
        || end_client.description().contains(filter)
        || end_client.mac.contains(filter)
}

/// A fetch failure on one branch degrades to an empty branch; the walk
/// carries on with whatever the sibling branches returned.
fn degrade<T>(result: Result<Vec<T>>, what: &str, scope: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!("Skipping {} for {}: {}", what, scope, e);
            Vec::new()
        }
    }
}

/// Walk the full hierarchy and accumulate clients matching the filter.
///
/// Client fetches for sibling devices within one network run concurrently
/// (bounded), then get sorted back into device order before filtering, so
/// the accumulated records appear in the same order a serial walk would
/// produce them.
///
/// A walk that completes without matching any client is a failure, not a
/// success with an empty list; callers rely on that.
pub async fn locate_clients(
    client: &MerakiClient,
    params: &DiscoveryParams,
) -> Result<DiscoveryReport> {
    let mut records: Vec<CompositeRecord> = Vec::new();

    let organizations = degrade(client.get_organizations().await, "organizations", "account");
    for organization in &organizations {
        let networks = degrade(
            client.get_networks(&organization.id).await,
            "networks",
            &organization.name,
        );
        for network in &networks {
            let devices = degrade(
                client.get_devices(&network.id).await,
                "devices",
                &network.name,
            );

            let fetches = devices.iter().enumerate().map(|(idx, device)| async move {
                let clients = degrade(
                    client.get_clients(&device.serial, params.timespan).await,
                    "clients",
                    &device.serial,
                );
                (idx, clients)
            });
            let mut per_device: Vec<(usize, Vec<EndClient>)> = stream::iter(fetches)
                .buffer_unordered(limits::MAX_CONCURRENT_CLIENT_REQUESTS)
                .collect()
                .await;
            per_device.sort_by_key(|(idx, _)| *idx);

            for (idx, clients) in per_device {
                let device = &devices[idx];
                for end_client in clients {
                    if !matches_filter(&params.search_filter, &end_client) {
                        continue;
                    }
                    debug!(
                        "Matched client {} ({}) on device {}",
                        end_client.mac,
                        end_client.description(),
                        device.serial
                    );
                    records.push(CompositeRecord {
                        organization: organization.name.clone(),
                        network: network.name.clone(),
                        device: device.name.clone(),
                        client: ClientInfo {
                            ip: end_client.ip.clone(),
                            mac: end_client.mac.clone(),
                            description: end_client.description().to_string(),
                            dhcp_hostname: end_client.dhcp_hostname.clone(),
                        },
                    });
                }
            }
        }
    }

    let message = format!("Returned: {} clients", records.len());
    debug!("{}", message);

    if records.is_empty() {
        return Err(MerakiError::NoClients(message));
    }
    Ok(DiscoveryReport { records, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn end_client(mac: &str, description: Option<&str>, ip: &str, hostname: &str) -> EndClient {
        EndClient {
            mac: mac.to_string(),
            description: description.map(str::to_string),
            dhcp_hostname: hostname.to_string(),
            ip: ip.to_string(),
        }
    }

    #[test]
    fn test_wildcard_accepts_everything() {
        let c = end_client("aa:bb", None, "10.0.0.5", "host");
        assert!(matches_filter("*", &c));
    }

    #[test]
    fn test_filter_matches_description_substring() {
        let c = end_client("aa:bb", Some("wiz-laptop"), "10.0.0.5", "wiz");
        assert!(matches_filter("wiz", &c));
    }

    #[test]
    fn test_filter_matches_mac_substring() {
        let c = end_client("60:6c:77:01:22:42", None, "10.0.0.5", "host");
        assert!(matches_filter("6c:77", &c));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let c = end_client("aa:bb", Some("wiz-laptop"), "10.0.0.5", "wiz");
        assert!(!matches_filter("WIZ", &c));
    }

    #[test]
    fn test_filter_rejects_non_matching_client() {
        let c = end_client("aa:bb", Some("printer"), "10.0.0.5", "printer");
        assert!(!matches_filter("wiz", &c));
    }

    #[test]
    fn test_filter_handles_null_description() {
        let c = end_client("aa:bb", None, "10.0.0.5", "host");
        assert!(!matches_filter("wiz", &c));
    }

    fn params(filter: &str) -> DiscoveryParams {
        DiscoveryParams {
            search_filter: filter.to_string(),
            timespan: defaults::TIMESPAN_SECS,
        }
    }

    async fn mount_topology(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "name": "WWT"}
            ])))
            .mount(mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/1/networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "N1", "name": "HQ", "organizationId": "1"}
            ])))
            .mount(mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/networks/N1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"serial": "S1", "name": "SW1"}
            ])))
            .mount(mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/devices/S1/clients"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"mac": "aa:bb", "description": "wiz-laptop", "ip": "10.0.0.5", "dhcpHostname": "wiz"}
            ])))
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_locate_clients_end_to_end() {
        let mock_server = MockServer::start().await;
        let client = MerakiClient::test_client(&mock_server.uri());
        mount_topology(&mock_server).await;

        let report = locate_clients(&client, &params("wiz")).await.unwrap();

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.message, "Returned: 1 clients");
        let record = &report.records[0];
        assert_eq!(record.organization, "WWT");
        assert_eq!(record.network, "HQ");
        assert_eq!(record.device, "SW1");
        assert_eq!(record.client.mac, "aa:bb");
        assert_eq!(record.client.ip, "10.0.0.5");
        assert_eq!(record.client.description, "wiz-laptop");
        assert_eq!(record.client.dhcp_hostname, "wiz");
    }

    #[tokio::test]
    async fn test_locate_clients_zero_matches_is_a_failure() {
        let mock_server = MockServer::start().await;
        let client = MerakiClient::test_client(&mock_server.uri());
        mount_topology(&mock_server).await;

        // Every fetch succeeds; the filter just matches nothing
        let result = locate_clients(&client, &params("no-such-host")).await;

        match result {
            Err(MerakiError::NoClients(msg)) => assert_eq!(msg, "Returned: 0 clients"),
            other => panic!("Expected MerakiError::NoClients, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_locate_clients_failed_branch_degrades_to_empty() {
        let mock_server = MockServer::start().await;
        let client = MerakiClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "name": "Broken"},
                {"id": "2", "name": "Healthy"}
            ])))
            .mount(&mock_server)
            .await;
        // Networks fetch for org 1 fails at the HTTP level
        Mock::given(method("GET"))
            .and(path("/organizations/1/networks"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/2/networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "N2", "name": "Branch", "organizationId": "2"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/networks/N2/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"serial": "S2", "name": "AP1"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/devices/S2/clients"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"mac": "cc:dd", "description": null, "ip": "10.1.0.7", "dhcpHostname": "cam-1"}
            ])))
            .mount(&mock_server)
            .await;

        let report = locate_clients(&client, &params("*")).await.unwrap();

        // The broken organization contributed nothing; the walk still finished
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].organization, "Healthy");
        assert_eq!(report.records[0].client.description, "");
    }

    #[tokio::test]
    async fn test_locate_clients_preserves_device_order() {
        let mock_server = MockServer::start().await;
        let client = MerakiClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "name": "WWT"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/organizations/1/networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "N1", "name": "HQ", "organizationId": "1"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/networks/N1/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"serial": "S1", "name": "SW1"},
                {"serial": "S2", "name": "SW2"},
                {"serial": "S3", "name": "SW3"}
            ])))
            .mount(&mock_server)
            .await;
        for (serial, mac) in [("S1", "aa:01"), ("S2", "aa:02"), ("S3", "aa:03")] {
            Mock::given(method("GET"))
                .and(path(format!("/devices/{}/clients", serial)))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                    {"mac": mac, "description": "host", "ip": "10.0.0.1", "dhcpHostname": "h"}
                ])))
                .mount(&mock_server)
                .await;
        }

        let report = locate_clients(&client, &params("*")).await.unwrap();

        // Concurrent fetches, but records come back in device order
        let macs: Vec<&str> = report
            .records
            .iter()
            .map(|r| r.client.mac.as_str())
            .collect();
        assert_eq!(macs, vec!["aa:01", "aa:02", "aa:03"]);
        assert_eq!(report.records[0].device, "SW1");
        assert_eq!(report.records[2].device, "SW3");
    }
}
