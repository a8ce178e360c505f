pub mod resources;

pub use resources::{current_exe_dir, Resources};
