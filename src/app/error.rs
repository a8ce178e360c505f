use thiserror::Error;

/// Failures while bringing the main window up. Codes are the platform HRESULTs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupError {
    #[error("Failed to register window class (hresult {0:#010x})")]
    RegisterClass(i32),

    #[error("Failed to create main window (hresult {0:#010x})")]
    CreateWindow(i32),

    #[error("Failed to create button {id} (hresult {code:#010x})")]
    CreateButton { id: u16, code: i32 },
}
