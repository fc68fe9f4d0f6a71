//! Process settings loaded via OrthoConfig.
//!
//! Values come from `HOSTEL_*` environment variables, an optional config file
//! and command-line flags, in OrthoConfig's usual precedence. Accessors apply
//! the defaults so the raw fields stay optional.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroizing;

use crate::domain::{AdminSeed, AllocationPolicy};
use crate::outbound::security::MIN_SECRET_LEN;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_DATA_DIR: &str = "/data";
const DATABASE_FILE: &str = "hostel.db";
const DEFAULT_ADMIN_EMAIL: &str = "admin@hostelos.com";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEVELOPMENT_SECRET: &str = "hostel-development-secret-do-not-deploy";

/// Errors raised while interpreting settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind host is not an IP address.
    #[error("invalid bind host {host:?}")]
    BindHost { host: String },
    /// No usable signing secret outside debug builds.
    #[error("HOSTEL_JWT_SECRET must be set to at least {MIN_SECRET_LEN} bytes")]
    Secret,
}

/// Runtime configuration for the hostel backend.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOSTEL")]
pub struct HostelSettings {
    /// Listen port. Defaults to 3000.
    pub port: Option<u16>,
    /// Listen address. Defaults to all interfaces.
    pub bind_host: Option<String>,
    /// Store the database on the persistent disk when it is mounted.
    #[ortho_config(default = false)]
    pub production: bool,
    /// Persistent disk mount point. Defaults to `/data`.
    pub data_dir: Option<PathBuf>,
    /// Explicit database file. Overrides the production rules.
    pub database_path: Option<PathBuf>,
    /// Token signing secret.
    pub jwt_secret: Option<String>,
    /// `Secure` flag on the session cookie. Defaults to true.
    pub cookie_secure: Option<bool>,
    /// Check capacity and keep occupancy counters when allocating.
    #[ortho_config(default = false)]
    pub enforce_room_capacity: bool,
    /// Seeded admin email.
    pub admin_email: Option<String>,
    /// Seeded admin password.
    pub admin_password: Option<String>,
}

impl std::fmt::Debug for HostelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostelSettings")
            .field("port", &self.port)
            .field("bind_host", &self.bind_host)
            .field("production", &self.production)
            .field("data_dir", &self.data_dir)
            .field("database_path", &self.database_path)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("cookie_secure", &self.cookie_secure)
            .field("enforce_room_capacity", &self.enforce_room_capacity)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HostelSettings {
    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST);
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::BindHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Persistent disk mount point.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Database file to open.
    ///
    /// An explicit path wins. Production mode uses the data dir when it is
    /// mounted and warns otherwise.
    pub fn database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }
        let data_dir = self.data_dir();
        resolve_database_path(self.production, &data_dir, data_dir.is_dir())
    }

    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    pub fn allocation_policy(&self) -> AllocationPolicy {
        if self.enforce_room_capacity {
            AllocationPolicy::EnforceCapacity
        } else {
            AllocationPolicy::Permissive
        }
    }

    /// Credentials for the seeded admin account.
    pub fn admin_seed(&self) -> AdminSeed {
        AdminSeed::new(
            self.admin_email.as_deref().unwrap_or(DEFAULT_ADMIN_EMAIL),
            self.admin_password
                .as_deref()
                .unwrap_or(DEFAULT_ADMIN_PASSWORD),
        )
    }

    /// Token signing secret.
    ///
    /// Debug builds fall back to a fixed development secret. Release builds
    /// require a configured secret of at least [`MIN_SECRET_LEN`] bytes.
    pub fn signing_secret(&self) -> Result<Zeroizing<Vec<u8>>, SettingsError> {
        resolve_secret(self.jwt_secret.as_deref(), cfg!(debug_assertions))
    }
}

fn resolve_database_path(production: bool, data_dir: &Path, data_dir_exists: bool) -> PathBuf {
    match (production, data_dir_exists) {
        (true, true) => data_dir.join(DATABASE_FILE),
        (true, false) => {
            warn!(
                data_dir = %data_dir.display(),
                "persistent disk not mounted; data will not survive a restart"
            );
            PathBuf::from(DATABASE_FILE)
        }
        (false, _) => PathBuf::from(DATABASE_FILE),
    }
}

fn resolve_secret(
    configured: Option<&str>,
    allow_development: bool,
) -> Result<Zeroizing<Vec<u8>>, SettingsError> {
    match configured.filter(|secret| !secret.is_empty()) {
        Some(secret) if allow_development || secret.len() >= MIN_SECRET_LEN => {
            Ok(Zeroizing::new(secret.as_bytes().to_vec()))
        }
        Some(_) => Err(SettingsError::Secret),
        None if allow_development => {
            warn!("HOSTEL_JWT_SECRET unset; using the development signing secret");
            Ok(Zeroizing::new(DEVELOPMENT_SECRET.as_bytes().to_vec()))
        }
        None => Err(SettingsError::Secret),
    }
}
