pub mod journal;
pub mod session;
pub mod splash;
pub mod state;
pub mod streak;
