// Version information for the embed demo service

/// Service name, reported as the engine identifier in responses
pub const SERVICE_NAME: &str = "cfo-embed-demo";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("{} v{}", SERVICE_NAME, VERSION_NUMBER)
}
