use std::ffi::c_void;

use windows::{
    core::Result,
    Win32::{
        Foundation::{HWND, LPARAM, LRESULT, WPARAM},
        UI::WindowsAndMessaging::{MSG, SHOW_WINDOW_CMD, WINDOW_STYLE, WNDPROC},
    },
};

pub trait Window {
    fn set_hwnd(&mut self, hwnd: HWND);
    fn handle_message(&mut self, hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<LRESULT>;
}

/// Platform services available to a window procedure.
pub trait Shell {
    fn default_proc(&self, hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT;
    fn post_quit(&self, exit_code: i32);
    /// Modal OK box with the information icon. Blocks until the user dismisses it.
    fn information_box(&self, owner: HWND, text: &str, caption: &str);
}

#[derive(Clone, Copy, Debug)]
pub struct WindowClass {
    pub name: &'static str,
    pub wnd_proc: WNDPROC,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowDesc {
    pub class: &'static str,
    pub title: &'static str,
    pub style: WINDOW_STYLE,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Control identifier, only meaningful for child windows.
    pub id: Option<u16>,
}

pub trait WindowHost {
    fn register_class(&mut self, class: &WindowClass) -> Result<()>;

    /// `state` is handed to the window procedure through `CREATESTRUCTW::lpCreateParams`.
    fn create_window(&mut self, desc: &WindowDesc, parent: Option<HWND>, state: Option<*mut c_void>) -> Result<HWND>;

    fn destroy_window(&mut self, hwnd: HWND);
    fn show_window(&mut self, hwnd: HWND, show: SHOW_WINDOW_CMD);
}

#[derive(Clone, Copy, Debug)]
pub enum Pulled {
    Message(MSG),
    Quit(i32),
    Failed,
}

pub trait MessageQueue {
    /// Blocks until a message is available.
    fn pull(&mut self) -> Pulled;
    fn translate(&mut self, msg: &MSG);
    fn dispatch(&mut self, msg: &MSG) -> LRESULT;
}
