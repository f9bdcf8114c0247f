pub mod dialogs;
pub mod env;
