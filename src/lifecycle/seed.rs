//! Sample data the collections start with.

use crate::model::{ItemCreate, Priority, TodoCreate};
use crate::validation::ValidationError;

pub fn todos() -> Result<Vec<TodoCreate>, ValidationError> {
    [
        ("Clean house", "Cleaning of the house thoroughly", Priority::High),
        ("Sports", "Going to the gym for workout", Priority::Medium),
        ("Read", "Read chapter 4 of the book", Priority::Low),
        ("Work", "Complete project documentation", Priority::Medium),
        ("Study", "Prepare for upcoming exam", Priority::Low),
    ]
    .into_iter()
    .map(|(name, description, priority)| TodoCreate::new(name, description, priority))
    .collect()
}

pub fn items() -> Result<Vec<ItemCreate>, ValidationError> {
    [
        ("Apple", 50.0),
        ("Banana", 20.0),
        ("Mango", 70.0),
        ("Grapes", 40.0),
        ("Orange", 35.0),
    ]
    .into_iter()
    .map(|(name, price)| ItemCreate::new(name, price))
    .collect()
}
