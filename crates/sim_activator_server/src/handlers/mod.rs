pub mod activation;
pub mod health;
pub mod query;
