//! Full-screen terminal front end built on ratatui and crossterm.

pub mod app;
pub mod controller;
pub mod ui;
