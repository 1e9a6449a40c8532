pub mod findings;
pub mod health;
pub mod sources;
