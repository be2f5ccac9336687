/// Configuration constants for the Meraki dashboard API
pub mod api {
    /// Base path for dashboard API v0
    pub const BASE_PATH: &str = "/api/v0";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Networks endpoint segment (nested under an organization)
    pub const NETWORKS: &str = "networks";

    /// Devices endpoint segment (nested under a network)
    pub const DEVICES: &str = "devices";

    /// Clients endpoint segment (nested under a device serial)
    pub const CLIENTS: &str = "clients";

    /// VLANs endpoint segment (nested under a network)
    pub const VLANS: &str = "vlans";

    /// Header carrying the API key on every request
    pub const API_KEY_HEADER: &str = "X-Cisco-Meraki-API-Key";
}

/// Default values for CLI
pub mod defaults {
    /// Default dashboard host
    pub const DASHBOARD: &str = "dashboard.meraki.com";

    /// Default client search filter: return everything
    pub const SEARCH_FILTER: &str = "*";

    /// Default lookback window for client queries: one month of data
    pub const TIMESPAN_SECS: u64 = 2_592_000;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Hard limits imposed by the dashboard or by us
pub mod limits {
    /// Maximum timespan the dashboard accepts (30 days); larger values are clamped
    pub const MAX_TIMESPAN_SECS: u64 = 2_592_000;

    /// Concurrency cap for client fetches across sibling devices
    pub const MAX_CONCURRENT_CLIENT_REQUESTS: usize = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
        assert!(!api::BASE_PATH.ends_with('/'));
    }

    #[test]
    fn test_default_dashboard_is_bare_host() {
        assert!(defaults::DASHBOARD.contains('.'));
        assert!(!defaults::DASHBOARD.starts_with("https://"));
    }

    #[test]
    fn test_default_timespan_within_limit() {
        assert!(defaults::TIMESPAN_SECS <= limits::MAX_TIMESPAN_SECS);
    }
}
