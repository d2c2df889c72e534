pub mod config;
pub mod datasets;
pub mod decompress;
pub mod download;
pub mod error;
pub mod io;
pub mod join;
pub mod lang;
pub mod metadata;
pub mod pipeline;
pub mod schemas;
