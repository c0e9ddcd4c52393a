pub mod actions;
pub mod confirm;
pub mod document;
pub mod edit_history;
pub mod session;
