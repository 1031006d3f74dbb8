pub mod habits;
pub mod records;
pub mod settings;
pub mod stats;
