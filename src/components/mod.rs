pub mod logo_creator;
pub mod ui;
