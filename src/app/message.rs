use windows::Win32::{
    Foundation::{LPARAM, WPARAM},
    UI::WindowsAndMessaging::{WM_COMMAND, WM_DESTROY},
};

/// The messages the main window cares about, decoded from the raw triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    Destroy,
    /// `id` is the control or menu identifier, `control` the sending window (0 for menus and accelerators).
    Command { id: u16, notification: u16, control: isize },
    Other(u32),
}

impl WindowEvent {
    pub fn decode(msg: u32, wparam: WPARAM, lparam: LPARAM) -> Self {
        match msg {
            WM_DESTROY => WindowEvent::Destroy,
            WM_COMMAND => WindowEvent::Command {
                id: loword(wparam.0),
                notification: hiword(wparam.0),
                control: lparam.0,
            },
            other => WindowEvent::Other(other),
        }
    }
}

pub fn loword(value: usize) -> u16 {
    (value & 0xFFFF) as u16
}

pub fn hiword(value: usize) -> u16 {
    ((value >> 16) & 0xFFFF) as u16
}
