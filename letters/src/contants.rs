pub const DEFAULT_CATEGORY: &str = "other";
pub const DEFAULT_LOCATION: &str = "Unknown";
