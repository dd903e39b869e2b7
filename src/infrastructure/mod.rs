pub mod bootstrap;
pub mod config;
pub mod csv;
pub mod ml;
pub mod model_store;
