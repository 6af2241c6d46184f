//! Terminal front end for the Pizzafy order dashboard.

pub mod cli;
pub mod commands;
pub mod render;
