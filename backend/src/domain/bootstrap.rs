//! First-start seeding of the admin account and the default room inventory.
//!
//! Both steps are idempotent: the admin is created only when its email is
//! absent and rooms only when the inventory is empty.

use std::sync::Arc;

use tracing::info;
use zeroize::Zeroizing;

use crate::domain::ports::{PasswordHasher, RoomRepository, UserRepository};
use crate::domain::{DEFAULT_ROOMS, Error, NewAccount, Role, SignupDraft};

/// Display name given to the seeded admin.
pub const ADMIN_NAME: &str = "Super Admin";

/// Credentials for the seeded admin account.
#[derive(Clone)]
pub struct AdminSeed {
    email: String,
    password: Zeroizing<String>,
}

impl AdminSeed {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

impl std::fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeed")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What a bootstrap run created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BootstrapReport {
    pub admin_created: bool,
    pub rooms_created: usize,
}

/// Seeds an empty store.
#[derive(Clone)]
pub struct BootstrapService<U, R> {
    users: Arc<U>,
    rooms: Arc<R>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<U, R> BootstrapService<U, R>
where
    U: UserRepository,
    R: RoomRepository,
{
    pub fn new(users: Arc<U>, rooms: Arc<R>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            users,
            rooms,
            hasher,
        }
    }

    /// Seed the admin account and default rooms where missing.
    pub async fn run(&self, admin: &AdminSeed) -> Result<BootstrapReport, Error> {
        let admin_created = self.seed_admin(admin).await?;
        let rooms_created = self
            .rooms
            .seed_if_empty(DEFAULT_ROOMS)
            .await
            .map_err(|err| Error::internal(format!("room seeding failed: {err}")))?;
        if rooms_created > 0 {
            info!(rooms = rooms_created, "seeded default rooms");
        }
        Ok(BootstrapReport {
            admin_created,
            rooms_created,
        })
    }

    async fn seed_admin(&self, admin: &AdminSeed) -> Result<bool, Error> {
        let existing = self
            .users
            .find_credentials_by_email(admin.email())
            .await
            .map_err(|err| Error::internal(format!("admin lookup failed: {err}")))?;
        if existing.is_some() {
            return Ok(false);
        }

        let account = NewAccount::try_new(SignupDraft {
            name: ADMIN_NAME.to_owned(),
            email: admin.email.clone(),
            password: admin.password.as_str().to_owned(),
            role: Some(Role::Admin),
            ..SignupDraft::default()
        })?
        .verified();
        let digest = self
            .hasher
            .hash(account.password())
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        self.users
            .create(&account, &digest)
            .await
            .map_err(|err| Error::internal(format!("admin seeding failed: {err}")))?;
        info!(email = admin.email(), "seeded default admin");
        Ok(true)
    }
}
