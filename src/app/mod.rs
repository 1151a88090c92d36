pub mod audio;
pub mod events;
pub mod form;
pub mod settings;
pub mod state;
