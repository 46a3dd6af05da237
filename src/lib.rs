pub mod app;
pub mod config;
pub mod detail;
pub mod models;
pub mod omdb;
pub mod request;
pub mod search;
pub mod tui;
pub mod ui;
pub mod watchlist;
