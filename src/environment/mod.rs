//! Environment derivation and manifest mutation.
//!
//! - [`derive`] builds a new environment from a manifest and a name,
//!   applying the CI binding rules
//! - [`add`] validates and appends the derived environment, then projects
//!   the generated file tree

pub mod add;
pub mod derive;

pub use add::{add_env, add_environment, AddEnvParameters};
pub use derive::{derive_environment, APP_CI_TEMPLATE};
