pub mod common;
pub mod config;
pub mod random;
pub mod student;
pub mod roster;
pub mod paradox;
