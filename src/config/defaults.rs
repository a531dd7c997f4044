//! Default configuration values

/// Environment variable overriding the board tool command
pub const BOARD_TOOL_ENV: &str = "ARDUINO_CLI_CMD";

/// Environment variable overriding the library database URL
pub const LIBRARIES_URL_ENV: &str = "BOARDMETA_LIBRARIES_URL";

/// Board tool command used when nothing overrides it
pub const DEFAULT_BOARD_TOOL: &str = "./arduino-cli";

/// Default number of concurrent board detail invocations
pub const DEFAULT_DETAIL_JOBS: usize = 1;

/// Raw tool output directory, relative to the base directory
pub const RAW_DIR: &str = "storage/raw";

/// Raw board detail subdirectory, relative to the raw directory
pub const DETAILS_SUBDIR: &str = "details";

/// Published board output directory, relative to the base directory
pub const DOCS_DIR: &str = "docs";

/// Published library output directory, relative to the base directory
pub const WEB_DIR: &str = "web";

/// Raw listing file name
pub const LISTALL_FILE: &str = "board_listall.json";

/// Aggregated compact details file name
pub const BOARD_DETAILS_FILE: &str = "board_details.json";

/// Library export file name
pub const LIBRARIES_FILE: &str = "libraries.json";

/// Suffix appended to a raw detail path for its error artifact
pub const ERROR_ARTIFACT_SUFFIX: &str = ".error.txt";

/// HTTP connect timeout for the library database (in seconds)
pub const DOWNLOAD_CONNECT_TIMEOUT: u64 = 15;

/// HTTP total timeout for the library database (in seconds)
pub const DOWNLOAD_TIMEOUT: u64 = 60;

/// User agent sent with library database requests
pub const USER_AGENT: &str = "ArduinoCliBoard/1.0 (+rust)";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
