pub mod completion;
pub mod habit;
pub mod progress;
