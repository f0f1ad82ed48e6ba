//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

pub use cli::{
    BuildArgs, CliArgs, Command, LoggingOverrides, RenderArgs, ServeArgs, ServeOverrides,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "gusweb";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_GRACEFUL_SHUTDOWN_SECS: u64 = 30;
const DEFAULT_BRAND_TITLE: &str = "GUSdb";
const DEFAULT_BRAND_HREF: &str = "/";
const DEFAULT_FOOTER_COPY: &str = "Genomics Unified Schema";
const DEFAULT_CONTACT_EMAIL: &str = "webmaster@gusdb.org";
const DEFAULT_OUT_DIR: &str = "public";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub site: SiteSettings,
    pub build: BuildSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub graceful_shutdown: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

/// Site-wide values rendered by the shared header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub brand_title: String,
    pub brand_href: String,
    pub footer_copy: String,
    pub contact_email: String,
    pub navigation: Vec<NavigationSetting>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavigationSetting {
    pub label: String,
    pub href: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            brand_title: DEFAULT_BRAND_TITLE.to_string(),
            brand_href: DEFAULT_BRAND_HREF.to_string(),
            footer_copy: DEFAULT_FOOTER_COPY.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            navigation: default_navigation(),
        }
    }
}

fn default_navigation() -> Vec<NavigationSetting> {
    [("Home", "/"), ("About", "/about.html")]
        .into_iter()
        .map(|(label, href)| NavigationSetting {
            label: label.to_string(),
            href: href.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub out_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("GUSWEB").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match cli.command.as_ref() {
        Some(Command::Serve(args)) => raw.apply_serve_overrides(&args.overrides),
        Some(Command::Render(args)) => raw.apply_logging_overrides(&args.logging),
        Some(Command::Build(args)) => raw.apply_build_overrides(args),
        None => raw.apply_serve_overrides(&ServeOverrides::default()),
    }

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    logging: RawLoggingSettings,
    site: RawSiteSettings,
    build: RawBuildSettings,
}

impl RawSettings {
    fn apply_serve_overrides(&mut self, overrides: &ServeOverrides) {
        if let Some(host) = overrides.server_host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = overrides.server_port {
            self.server.port = Some(port);
        }
        if let Some(seconds) = overrides.server_graceful_shutdown_seconds {
            self.server.graceful_shutdown_seconds = Some(seconds);
        }

        self.apply_logging_overrides(&overrides.logging);
    }

    fn apply_build_overrides(&mut self, args: &BuildArgs) {
        if let Some(dir) = args.out_dir.as_ref() {
            self.build.out_dir = Some(dir.clone());
        }

        self.apply_logging_overrides(&args.logging);
    }

    fn apply_logging_overrides(&mut self, overrides: &LoggingOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            server,
            logging,
            site,
            build,
        } = raw;

        let server = build_server_settings(server)?;
        let logging = build_logging_settings(logging)?;
        let site = build_site_settings(site)?;
        let build = build_build_settings(build)?;

        Ok(Self {
            server,
            logging,
            site,
            build,
        })
    }
}

fn build_server_settings(server: RawServerSettings) -> Result<ServerSettings, LoadError> {
    let host = server.host.unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = server.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(LoadError::invalid(
            "server.port",
            "port must be greater than zero",
        ));
    }

    let addr = parse_socket_addr(&host, port)
        .map_err(|reason| LoadError::invalid("server.addr", reason))?;

    let graceful_secs = server
        .graceful_shutdown_seconds
        .unwrap_or(DEFAULT_GRACEFUL_SHUTDOWN_SECS);
    if graceful_secs == 0 {
        return Err(LoadError::invalid(
            "server.graceful_shutdown_seconds",
            "must be greater than zero",
        ));
    }

    Ok(ServerSettings {
        addr,
        graceful_shutdown: Duration::from_secs(graceful_secs),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let defaults = SiteSettings::default();

    let brand_title = non_blank(site.brand_title, "site.brand_title")?
        .unwrap_or(defaults.brand_title);
    let brand_href = match non_blank(site.brand_href, "site.brand_href")? {
        Some(href) => {
            validate_href(&href).map_err(|reason| LoadError::invalid("site.brand_href", reason))?;
            href
        }
        None => defaults.brand_href,
    };
    let footer_copy = site
        .footer_copy
        .map(|copy| copy.trim().to_string())
        .unwrap_or(defaults.footer_copy);

    let contact_email = non_blank(site.contact_email, "site.contact_email")?
        .unwrap_or(defaults.contact_email);
    if !contact_email.contains('@') || contact_email.contains(char::is_whitespace) {
        return Err(LoadError::invalid(
            "site.contact_email",
            format!("`{contact_email}` is not an e-mail address"),
        ));
    }

    let navigation = match site.navigation {
        Some(entries) => {
            for entry in &entries {
                if entry.label.trim().is_empty() {
                    return Err(LoadError::invalid(
                        "site.navigation",
                        "navigation labels must not be empty",
                    ));
                }
                validate_href(&entry.href)
                    .map_err(|reason| LoadError::invalid("site.navigation", reason))?;
            }
            entries
        }
        None => defaults.navigation,
    };

    Ok(SiteSettings {
        brand_title,
        brand_href,
        footer_copy,
        contact_email,
        navigation,
    })
}

fn build_build_settings(build: RawBuildSettings) -> Result<BuildSettings, LoadError> {
    let out_dir = build
        .out_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    if out_dir.as_os_str().is_empty() {
        return Err(LoadError::invalid("build.out_dir", "must not be empty"));
    }
    Ok(BuildSettings { out_dir })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
    graceful_shutdown_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    brand_title: Option<String>,
    brand_href: Option<String>,
    footer_copy: Option<String>,
    contact_email: Option<String>,
    navigation: Option<Vec<NavigationSetting>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawBuildSettings {
    out_dir: Option<PathBuf>,
}

fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let candidate = format!("{host}:{port}");
    candidate
        .parse()
        .map_err(|err| format!("invalid address `{candidate}`: {err}"))
}

fn non_blank(value: Option<String>, key: &'static str) -> Result<Option<String>, LoadError> {
    match value {
        Some(value) if value.trim().is_empty() => {
            Err(LoadError::invalid(key, "must not be blank"))
        }
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

/// Accept site-relative paths and absolute http(s) URLs.
fn validate_href(href: &str) -> Result<(), String> {
    if href.starts_with('/') && !href.starts_with("//") {
        return Ok(());
    }
    let url = Url::parse(href).map_err(|err| format!("invalid link `{href}`: {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme `{other}` in `{href}`")),
    }
}

#[cfg(test)]
mod tests;
