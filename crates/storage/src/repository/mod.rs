pub mod event;
pub mod fight;
pub mod fighter;
pub mod ranking;
