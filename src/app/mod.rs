mod app;
pub mod error;
pub mod event_loop;
pub mod message;

pub use app::Application;
