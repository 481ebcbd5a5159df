use super::settings::{GeoConfig, LoggingConfig, ServerConfig};

// ---------------------------------------------------------------------------
// Top-level struct defaults
// ---------------------------------------------------------------------------

pub fn default_server_config() -> ServerConfig {
    ServerConfig {
        bind: default_bind(),
        timezone: default_server_timezone(),
        debug_param: default_debug_param(),
    }
}

pub fn default_geo_config() -> GeoConfig {
    GeoConfig {
        base_url: default_geo_base_url(),
        timeout_ms: default_geo_timeout_ms(),
    }
}

pub fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file: default_log_file(),
        visit_log: default_visit_log(),
    }
}

// ---------------------------------------------------------------------------
// Field defaults
// ---------------------------------------------------------------------------

pub fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

pub fn default_server_timezone() -> String {
    "America/Argentina/Buenos_Aires".to_string()
}

pub fn default_debug_param() -> String {
    "debug".to_string()
}

pub fn default_geo_base_url() -> String {
    "http://ip-api.com".to_string()
}

pub fn default_geo_timeout_ms() -> u64 {
    5000
}

pub fn default_log_level() -> String {
    "info,vigia=debug".to_string()
}

pub fn default_log_file() -> String {
    "/opt/vigia/logs/vigia.log".to_string()
}

pub fn default_visit_log() -> String {
    "/opt/vigia/logs/visitas.log".to_string()
}
