pub mod config;
pub mod feedback;
pub mod logging;
pub mod output;
pub mod scoring;
pub mod storage;
pub mod timeline;
