//! Output formatting: table, CSV, JSON

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::meraki::{CompositeRecord, Vlan};

/// Print discovery records in the requested format
pub fn output_records(records: &[CompositeRecord], format: OutputFormat) {
    match format {
        OutputFormat::Table => print_records_table(records),
        OutputFormat::Csv => print_records_csv(records),
        OutputFormat::Json => print_json(records),
    }
}

/// Print a network's VLANs in the requested format
pub fn output_vlans(vlans: &[Vlan], format: OutputFormat) {
    match format {
        OutputFormat::Table => print_vlans_table(vlans),
        OutputFormat::Csv => print_vlans_csv(vlans),
        OutputFormat::Json => print_vlans_json(vlans),
    }
}

fn print_records_table(records: &[CompositeRecord]) {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![
        "Organization",
        "Network",
        "Device",
        "Description",
        "MAC",
        "IP",
        "DHCP Hostname",
    ]);

    for record in records {
        table.add_row(vec![
            &record.organization,
            &record.network,
            &record.device,
            &record.client.description,
            &record.client.mac,
            &record.client.ip,
            &record.client.dhcp_hostname,
        ]);
    }

    println!("{}", table);
}

fn print_records_csv(records: &[CompositeRecord]) {
    println!("organization,network,device,description,mac,ip,dhcp_hostname");
    for record in records {
        println!(
            "{},{},{},{},{},{},{}",
            escape_csv(&record.organization),
            escape_csv(&record.network),
            escape_csv(&record.device),
            escape_csv(&record.client.description),
            escape_csv(&record.client.mac),
            escape_csv(&record.client.ip),
            escape_csv(&record.client.dhcp_hostname)
        );
    }
}

fn print_vlans_table(vlans: &[Vlan]) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["ID", "Name", "Appliance IP", "Subnet"]);

    for vlan in vlans {
        table.add_row(vec![
            &vlan.id,
            &vlan.name,
            vlan.appliance_ip.as_deref().unwrap_or(""),
            vlan.subnet.as_deref().unwrap_or(""),
        ]);
    }

    println!("{}", table);
}

fn print_vlans_csv(vlans: &[Vlan]) {
    println!("id,name,appliance_ip,subnet");
    for vlan in vlans {
        println!(
            "{},{},{},{}",
            escape_csv(&vlan.id),
            escape_csv(&vlan.name),
            escape_csv(vlan.appliance_ip.as_deref().unwrap_or("")),
            escape_csv(vlan.subnet.as_deref().unwrap_or(""))
        );
    }
}

fn print_json<T: serde::Serialize>(items: &[T]) {
    match serde_json::to_string_pretty(items) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

fn print_vlans_json(vlans: &[Vlan]) {
    let values: Vec<serde_json::Value> = vlans
        .iter()
        .map(|vlan| {
            serde_json::json!({
                "id": vlan.id,
                "name": vlan.name,
                "applianceIp": vlan.appliance_ip,
                "subnet": vlan.subnet,
                "networkId": vlan.network_id,
            })
        })
        .collect();
    print_json(&values);
}

/// Escape a value for CSV output
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
