pub mod commands;
pub mod orders;
pub mod state;
