//! sim_activator_postgres — sqlx implementation of the `ActivationStore` port.

mod store;

pub use store::{mask_database_url, DatabaseConfig, PgActivationStore};
