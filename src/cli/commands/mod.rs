pub mod add;
pub mod config;
pub mod del;
pub mod done;
pub mod edit;
pub mod history;
pub mod list;
pub mod progress;
