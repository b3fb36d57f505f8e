pub mod clients;
pub mod collections;
pub mod dashboard;
pub mod orders;
pub mod revisions;
pub mod settings;
