/// Application name
pub const APP_NAME: &str = "Fish Tracker";

/// Storage key the catch log is persisted under
pub const LOG_KEY: &str = "fishLog";

/// Base URL for the location map-search link
pub const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Default SQLite file name inside the data directory
pub const DB_FILE_NAME: &str = "fishlog.db";
