pub mod config;
pub mod files;
pub mod highlight;
pub mod md;
