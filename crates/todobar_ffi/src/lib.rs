//! FRB-facing surface of the ToDoBar core for the UI shell.

pub mod api;
