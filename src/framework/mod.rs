mod router;
mod traits;
mod win32;

#[cfg(test)]
pub mod testing;

// Re-export public interface
pub use router::wnd_proc_router;
pub use win32::{Win32Host, Win32Queue, Win32Shell};
pub use traits::{MessageQueue, Pulled, Shell, Window, WindowClass, WindowDesc, WindowHost};
