pub mod application;
pub mod event;
pub mod exam;
pub mod office;
pub mod progress;
pub mod resume;
pub mod role;
