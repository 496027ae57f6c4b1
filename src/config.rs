use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
    pub page_size: usize,
    pub max_page_size: usize,
    /// Künstliche Latenz in Millisekunden für Listing/Suche (0 = aus).
    pub simulated_latency_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub access_ttl_secs: u64,
    pub refresh_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SecurityConfig {
    pub enable_hsts: Option<bool>,
    pub hsts_max_age: Option<u64>,
    pub hsts_include_subdomains: Option<bool>,
    pub csp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub listing: ListingConfig,
    pub auth: AuthConfig,
    pub security: Option<SecurityConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        let defaults: &str = include_str!("../config/default.toml");
        match ::config::Config::builder()
            .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => {
                    eprintln!("FATAL: Failed to deserialize default config: {}", e);
                    panic!("Failed to deserialize default config: {}", e);
                }
            },
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        // Mirror defaults from config/default.toml
        Self { page_size: 20, max_page_size: 100, simulated_latency_ms: 120 }
    }
}

pub fn load() -> anyhow::Result<AppConfig> {
    // Load .env first (optional)
    let _ = dotenvy::dotenv();

    let defaults: &str = include_str!("../config/default.toml");
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
        // Optional local file: aktenwald.toml (in CWD)
        .add_source(::config::File::with_name("aktenwald").required(false));

    if let Ok(custom_path) = std::env::var("AKTENWALD_CONFIG") {
        builder = builder.add_source(::config::File::with_name(&custom_path).required(false));
    }
    // Environment variables last to have highest precedence
    builder = builder.add_source(::config::Environment::with_prefix("AKTENWALD").separator("__"));

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    // Server
    if cfg.server.port == 0 {
        return Err(anyhow::anyhow!("invalid server.port: {}", cfg.server.port));
    }
    #[cfg(unix)]
    if cfg.server.port < 1024 {
        tracing::warn!("Using privileged port {} - may require elevated permissions", cfg.server.port);
    }

    // Listing
    if cfg.listing.page_size == 0 {
        return Err(anyhow::anyhow!("listing.page_size must be > 0"));
    }
    if cfg.listing.max_page_size < cfg.listing.page_size {
        return Err(anyhow::anyhow!("listing.max_page_size must be >= page_size"));
    }
    if cfg.listing.simulated_latency_ms > 10_000 {
        return Err(anyhow::anyhow!("listing.simulated_latency_ms must be <= 10000"));
    }

    // Auth
    if cfg.auth.access_ttl_secs == 0 {
        return Err(anyhow::anyhow!("auth.access_ttl_secs must be > 0"));
    }
    if cfg.auth.refresh_ttl_secs <= cfg.auth.access_ttl_secs {
        return Err(anyhow::anyhow!("auth.refresh_ttl_secs must be > access_ttl_secs"));
    }

    Ok(())
}
