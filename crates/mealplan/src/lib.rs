mod generate;
mod planner;
mod store;
mod title;
mod week;

pub use generate::*;
pub use planner::*;
pub use store::*;
pub use title::*;
pub use week::*;
