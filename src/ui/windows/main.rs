use std::ffi::c_void;

use windows::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::{
        BS_DEFPUSHBUTTON, CW_USEDEFAULT, WINDOW_STYLE, WM_DESTROY, WNDPROC, WS_CHILD, WS_OVERLAPPEDWINDOW, WS_TABSTOP,
        WS_VISIBLE,
    },
};

use crate::{
    app::{error::StartupError, message::WindowEvent},
    framework::{Shell, Window, WindowClass, WindowDesc, WindowHost},
};

pub const WINDOW_CLASS_NAME: &str = "Clickbox.MainWindow";
pub const WINDOW_TITLE: &str = "Cửa sổ đầu tiên bằng Rust";

pub const ID_BUTTON: u16 = 1;
pub const BUTTON_LABEL: &str = "Nhấn tôi";

pub const NOTICE_CAPTION: &str = "Thông báo";
pub const NOTICE_TEXT: &str = "Bạn đã nhấn nút!";

pub fn main_window_desc() -> WindowDesc {
    WindowDesc {
        class: WINDOW_CLASS_NAME,
        title: WINDOW_TITLE,
        style: WS_OVERLAPPEDWINDOW,
        x: CW_USEDEFAULT,
        y: CW_USEDEFAULT,
        width: 400,
        height: 200,
        id: None,
    }
}

pub fn button_desc() -> WindowDesc {
    WindowDesc {
        class: "BUTTON",
        title: BUTTON_LABEL,
        style: WS_TABSTOP | WS_VISIBLE | WS_CHILD | WINDOW_STYLE(BS_DEFPUSHBUTTON as u32),
        x: 130,
        y: 70,
        width: 120,
        height: 30,
        id: Some(ID_BUTTON),
    }
}

/// Top-level window with its single push-button.
pub struct MainWindow<S: Shell> {
    hwnd: HWND,
    button: HWND,
    shell: S,
}

impl<S: Shell> MainWindow<S> {
    pub fn new(shell: S) -> Box<Self> {
        Box::new(Self {
            hwnd: HWND::default(),
            button: HWND::default(),
            shell,
        })
    }

    pub fn window_class() -> WindowClass {
        WindowClass {
            name: WINDOW_CLASS_NAME,
            wnd_proc: Self::wnd_proc(),
        }
    }

    fn wnd_proc() -> WNDPROC {
        Some(crate::framework::wnd_proc_router::<Self>)
    }

    /// Registers the class and creates the window and its button, without showing anything.
    ///
    /// `self` must stay at the same address for as long as the window exists, the
    /// window procedure reaches it through `GWLP_USERDATA`.
    pub fn create<H: WindowHost>(&mut self, host: &mut H) -> Result<HWND, StartupError> {
        host.register_class(&Self::window_class())
            .map_err(|e| StartupError::RegisterClass(e.code().0))?;

        let state = self as *mut Self as *mut c_void;
        let hwnd = host.create_window(&main_window_desc(), None, Some(state))
            .map_err(|e| StartupError::CreateWindow(e.code().0))?;
        self.hwnd = hwnd;

        match host.create_window(&button_desc(), Some(hwnd), None) {
            Ok(button) => self.button = button,
            Err(e) => {
                // forget the handle first, its WM_DESTROY must not end the message loop
                self.hwnd = HWND::default();
                host.destroy_window(hwnd);
                return Err(StartupError::CreateButton { id: ID_BUTTON, code: e.code().0 });
            }
        }

        Ok(hwnd)
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    pub fn button(&self) -> HWND {
        self.button
    }

    #[allow(dead_code)]
    pub fn shell(&self) -> &S {
        &self.shell
    }
}

impl<S: Shell> Window for MainWindow<S> {
    fn set_hwnd(&mut self, hwnd: HWND) {
        self.hwnd = hwnd;
    }

    fn handle_message(&mut self, hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Option<LRESULT> {
        if msg == WM_DESTROY && hwnd != self.hwnd {
            log::debug!("Discarded main window {:?} destroyed", hwnd);
            return Some(self.shell.default_proc(hwnd, msg, wparam, lparam));
        }
        Some(window_proc(&self.shell, hwnd, msg, wparam, lparam))
    }
}

/// The main window's callback. Every path yields an `LRESULT`.
pub fn window_proc<S: Shell>(shell: &S, hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match WindowEvent::decode(msg, wparam, lparam) {
        WindowEvent::Destroy => {
            log::info!("Main window destroyed");
            shell.post_quit(0);
            LRESULT(0)
        }
        WindowEvent::Command { id: ID_BUTTON, notification, .. } => {
            log::debug!("Button {} command (notification {})", ID_BUTTON, notification);
            shell.information_box(hwnd, NOTICE_TEXT, NOTICE_CAPTION);
            shell.default_proc(hwnd, msg, wparam, lparam)
        }
        _ => shell.default_proc(hwnd, msg, wparam, lparam),
    }
}
