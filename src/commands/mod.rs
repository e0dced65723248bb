pub mod delete;

pub use delete::execute_delete;
