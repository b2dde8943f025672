pub mod cli;
pub mod config;
pub mod consensus;
pub mod lander;
pub mod wallet;
