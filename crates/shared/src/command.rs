use crate::mealplan::Category;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no {0} values available in catalog")]
    EmptyCategory(Category),

    #[error("week offset {0} is out of range")]
    WeekOutOfRange(i64),

    #[error("failed to read stored data: {0}")]
    PersistenceRead(String),

    #[error("failed to write stored data: {0}")]
    PersistenceWrite(String),
}

pub type Result<T> = std::result::Result<T, Error>;
