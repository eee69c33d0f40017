mod add_form;
mod sidebar;
mod tag_badge;
mod todo_list;
mod todo_row;

pub use add_form::AddForm;
pub use sidebar::Sidebar;
pub use tag_badge::TagBadge;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
