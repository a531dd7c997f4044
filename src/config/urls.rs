//! Remote resource URLs

/// Arduino library documentation database (SQLite)
pub const LIBRARIES_DB: &str = "https://lang-ship.com/reference/Arduino/libraries/doxygen.db";
