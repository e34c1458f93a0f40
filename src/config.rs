/// Configuration constants for the classic infrastructure API
pub mod api {
    /// REST endpoint base path
    pub const BASE_PATH: &str = "/rest/v3.1";

    /// Account service (dedicated host listing hangs off the account)
    pub const ACCOUNT_SERVICE: &str = "SoftLayer_Account";

    /// Dedicated host service
    pub const DEDICATED_HOST_SERVICE: &str = "SoftLayer_Virtual_DedicatedHost";

    /// Virtual guest service
    pub const GUEST_SERVICE: &str = "SoftLayer_Virtual_Guest";

    /// Network VLAN service
    pub const VLAN_SERVICE: &str = "SoftLayer_Network_Vlan";

    /// Product package service
    pub const PACKAGE_SERVICE: &str = "SoftLayer_Product_Package";

    /// Product order service (verify/place)
    pub const ORDER_SERVICE: &str = "SoftLayer_Product_Order";

    /// Page size for resultLimit pagination
    pub const PAGE_LIMIT: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Config file path relative to HOME
    pub const FILE_PATH: &str = ".softlayer/config.json";

    /// Environment variable for the API username
    pub const USERNAME_ENV_VAR: &str = "SL_USERNAME";

    /// Environment variable for the API key
    pub const API_KEY_ENV_VAR: &str = "SL_API_KEY";
}

/// Default values for CLI and ordering
pub mod defaults {
    /// Default API host
    pub const API_HOST: &str = "api.softlayer.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// The only dedicated host size currently orderable
    pub const HOST_SIZE: &str = "56_CORES_X_242_RAM_X_1_4_TB";

    /// Ordering package key name for dedicated hosts
    pub const HOST_PACKAGE_KEY: &str = "DEDICATED_HOST";

    /// Default billing rate
    pub const BILLING: &str = "hourly";
}

/// Fixed field mask for the dedicated host detail view
pub const HOST_DETAIL_MASK: &str = "id,name,cpuCount,memoryCapacity,diskCapacity,createDate,modifyDate,\
backendRouter[id,hostname,domain],\
billingItem[id,nextInvoiceTotalRecurringAmount,children[categoryCode,nextInvoiceTotalRecurringAmount],orderItem[id,order.userRecord[username]]],\
datacenter[id,name,longName],guests[id,hostname,domain,uuid],guestCount";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
    }

    #[test]
    fn test_credentials_env_vars() {
        assert_eq!(credentials::USERNAME_ENV_VAR, "SL_USERNAME");
        assert_eq!(credentials::API_KEY_ENV_VAR, "SL_API_KEY");
    }

    #[test]
    fn test_default_host_is_valid() {
        assert!(defaults::API_HOST.contains('.'));
        assert!(!defaults::API_HOST.starts_with("https://"));
    }

    #[test]
    fn test_detail_mask_is_sent_verbatim() {
        // The mask goes into a query parameter unmodified
        assert!(!HOST_DETAIL_MASK.contains(' '));
    }
}
