pub mod activities;
pub mod backup;
pub mod config;
pub mod day;
pub mod db;
pub mod demo;
pub mod export;
pub mod init;
pub mod log;
pub mod remove;
pub mod today;
pub mod week;
