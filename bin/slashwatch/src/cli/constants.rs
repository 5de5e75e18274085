pub const DEFAULT_BEACON_API_ENDPOINT: &str = "http://localhost:5052";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "120";
pub const DEFAULT_METRICS_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_METRICS_PORT: u16 = 8080;
pub const DEFAULT_VERBOSITY: u8 = 3;
