pub mod date_controls;
pub mod gallery;
pub mod header;
pub mod modal;
pub mod status;
