// LogClassify - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogClassify";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogClassify";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Classification service
// =============================================================================

/// Endpoint every classification batch is POSTed to.
pub const CLASSIFY_ENDPOINT: &str = "http://localhost:8080/classify";

/// Path of the service health check, resolved against the classify endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Source identifier stamped on every request item of a batch.
pub const CLASSIFY_SOURCE: &str = "App1";

/// User-Agent header sent with every request.
pub const USER_AGENT: &str = concat!("LogClassify/", env!("CARGO_PKG_VERSION"));

/// Worker threads in the runtime that drives classification requests.
/// One is plenty: the work is a handful of concurrent HTTP exchanges.
pub const CLASSIFY_WORKER_THREADS: usize = 1;

// =============================================================================
// Input limits
// =============================================================================

/// Largest file accepted by "Open Log File…" (the buffer itself is unbounded).
pub const MAX_INPUT_FILE_BYTES: u64 = 16 * 1024 * 1024; // 16 MB

/// Maximum number of outcome messages processed by the UI loop per frame.
pub const MAX_CLASSIFY_MESSAGES_PER_FRAME: usize = 32;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Rows of the input text area shown before it scrolls.
pub const INPUT_ROWS: usize = 10;

/// Placeholder shown in the empty input area.
pub const INPUT_HINT: &str = "Paste logs here, one per line";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a log line included in debug output.
/// Prevents accidental exposure of sensitive data in long lines.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
