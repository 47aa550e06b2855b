mod catalog;
mod command;
pub mod mealplan;

pub use catalog::*;
pub use command::*;
