//! Application-wide constants

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// CAPABILITY STRINGS
// =============================================================================

/// Capability identifiers as stored on profile rows
pub mod capabilities {
    pub const VIEW_NAME: &str = "view_name";
    pub const EDIT_ALL_CONTESTS: &str = "edit_all_contests";
    pub const SEE_PRIVATE_CONTESTS: &str = "see_private_contests";
    pub const SEE_ORGANIZATION_PROBLEM: &str = "see_organization_problem";
    pub const EDIT_ALL_PROBLEMS: &str = "edit_all_problems";
    pub const VIEW_ALL_SUBMISSIONS: &str = "view_all_submissions";
}

// =============================================================================
// SCORING
// =============================================================================

/// Format name used when a contest row carries none
pub const DEFAULT_FORMAT_NAME: &str = "default";

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
