pub mod board;
pub mod catalog;
pub mod database;
