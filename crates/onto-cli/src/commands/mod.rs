pub mod batch;
pub mod config;
pub mod dispatch;
pub mod lookup;
pub mod resolve;
pub mod shared;
