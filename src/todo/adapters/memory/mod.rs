//! In-memory adapters for todo persistence.

mod todo;

pub use todo::InMemoryTodoRepository;
