//! UI Components
//!
//! Leptos components for the header, list and footer.

mod new_todo_input;
mod todo_row;
mod todo_list_view;
mod todo_footer;

pub use new_todo_input::NewTodoInput;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use todo_footer::TodoFooter;
