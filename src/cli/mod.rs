//! Terminal front end: argument handling, rendering and the input loop

pub mod chart;
pub mod dashboard;
pub mod interactive;
pub mod setup;
pub mod show;
pub mod ui;
