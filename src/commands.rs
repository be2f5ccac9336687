//! Command handlers wiring CLI arguments to the API workflows

use log::{debug, info};

use crate::cli::{OutputFormat, VlanCommand};
use crate::error::MerakiError;
use crate::meraki::{
    create_vlan, locate_clients, resolve_network_id, DiscoveryParams, MerakiClient, VlanRequest,
};
use crate::output::{output_records, output_vlans};
use crate::ui::{create_spinner, finish_spinner};

/// Attach the most recent response status code to a terminal error, when
/// one exists. Resolution failures before any HTTP call carry none.
fn with_last_status(e: MerakiError, client: &MerakiClient) -> Box<dyn std::error::Error> {
    match client.last_status_code() {
        Some(code) => format!("{} (last status: {})", e, code).into(),
        None => Box::new(e),
    }
}

/// Run the discover command: walk the tree, print matching clients
pub async fn run_discover_command(
    client: &MerakiClient,
    filter: String,
    timespan: u64,
    format: OutputFormat,
    quiet: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    debug!("Discovering clients (filter '{}', timespan {})", filter, timespan);
    let params = DiscoveryParams {
        search_filter: filter,
        timespan,
    };

    let spinner = create_spinner("Walking the organization tree...", quiet);
    let result = locate_clients(client, &params).await;

    match result {
        Ok(report) => {
            finish_spinner(spinner, &report.message);
            info!("{}", report.message);
            output_records(&report.records, format);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Discovery failed");
            Err(with_last_status(e, client))
        }
    }
}

/// Run a vlan subcommand
pub async fn run_vlan_command(
    client: &MerakiClient,
    action: VlanCommand,
    format: OutputFormat,
    quiet: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    match action {
        VlanCommand::Add {
            org,
            network,
            vlan,
            name,
            appliance_ip,
            subnet,
        } => {
            let request = VlanRequest {
                id: vlan,
                name,
                appliance_ip,
                subnet,
            };

            let spinner = create_spinner("Creating VLAN...", quiet);
            match create_vlan(client, &org, &network, &request).await {
                Ok(outcome) => {
                    finish_spinner(spinner, "VLAN created");
                    debug!("POST acknowledged with status {}", outcome.status);
                    // The dashboard echoes the created resource back
                    match serde_json::to_string_pretty(&outcome.body) {
                        Ok(json) => println!("{}", json),
                        Err(_) => println!("{}", outcome.body),
                    }
                    Ok(())
                }
                Err(e) => {
                    finish_spinner(spinner, "VLAN creation failed");
                    Err(with_last_status(e, client))
                }
            }
        }
        VlanCommand::List { org, network } => {
            let spinner = create_spinner("Fetching VLANs...", quiet);
            let result = async {
                let network_id = resolve_network_id(client, &org, &network).await?;
                client.get_vlans(&network_id).await
            }
            .await;

            match result {
                Ok(vlans) => {
                    finish_spinner(spinner, &format!("Returned: {} VLANs", vlans.len()));
                    output_vlans(&vlans, format);
                    Ok(())
                }
                Err(e) => {
                    finish_spinner(spinner, "VLAN listing failed");
                    Err(with_last_status(e, client))
                }
            }
        }
        VlanCommand::Delete | VlanCommand::Update => Err(Box::new(MerakiError::Unsupported(
            "Delete and Update not implemented".to_string(),
        ))),
    }
}
