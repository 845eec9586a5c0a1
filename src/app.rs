//! Start-up wiring: settings and seed data into a ready [`Store`].

use crate::{
    config::Settings,
    errors::Result,
    seed::{self, Seed},
    store::Store,
};
use tracing::info;

/// Loads the configured seed (or the built-in demo records), signs in the
/// configured user, and returns the store.
///
/// # Errors
/// Returns an error if the seed file cannot be loaded or the configured
/// active user is not among the seeded users.
pub fn build_store(settings: &Settings) -> Result<Store> {
    let seed: Seed = match &settings.seed_path {
        Some(path) => seed::load_seed(path)?,
        None => {
            info!("Using built-in demo records");
            seed::mock_seed()
        }
    };
    let user = seed.active_user(settings.active_user_id.as_deref())?;
    if let Some(user) = &user {
        info!(user = %user.name, role = %user.role, "Active user selected");
    }
    Ok(Store::new(seed.into_state(user)))
}
