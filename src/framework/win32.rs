use std::ffi::c_void;

use windows::{
    core::{Error, Result, HSTRING, PCWSTR},
    Win32::{
        Foundation::{HMODULE, HWND, LPARAM, LRESULT, WPARAM},
        Graphics::Gdi::{UpdateWindow, COLOR_WINDOW, HBRUSH},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, LoadCursorW,
            MessageBoxW, PostQuitMessage, RegisterClassW, ShowWindow, TranslateMessage, HMENU, IDC_ARROW,
            MB_ICONINFORMATION, MB_OK, MSG, SHOW_WINDOW_CMD, WINDOW_EX_STYLE, WNDCLASSW,
        },
    },
};

use super::traits::{MessageQueue, Pulled, Shell, WindowClass, WindowDesc, WindowHost};

#[derive(Clone, Copy, Debug, Default)]
pub struct Win32Shell;

impl Shell for Win32Shell {
    fn default_proc(&self, hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
        unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
    }

    fn post_quit(&self, exit_code: i32) {
        unsafe { PostQuitMessage(exit_code) }
    }

    fn information_box(&self, owner: HWND, text: &str, caption: &str) {
        let owner = if owner.is_invalid() { None } else { Some(owner) };
        unsafe {
            MessageBoxW(owner, &HSTRING::from(text), &HSTRING::from(caption), MB_OK | MB_ICONINFORMATION);
        }
    }
}

pub struct Win32Host {
    hinstance: HMODULE,
}

impl Win32Host {
    pub fn new() -> Result<Self> {
        let hinstance = unsafe { GetModuleHandleW(None)? };
        Ok(Self { hinstance })
    }
}

impl WindowHost for Win32Host {
    fn register_class(&mut self, class: &WindowClass) -> Result<()> {
        let class_name = HSTRING::from(class.name);
        let wc = WNDCLASSW {
            hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
            hInstance: self.hinstance.into(),
            lpszClassName: PCWSTR(class_name.as_ptr()),
            lpfnWndProc: class.wnd_proc,
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut _),
            ..Default::default()
        };
        if unsafe { RegisterClassW(&wc) } == 0 {
            return Err(Error::from_win32());
        }
        Ok(())
    }

    fn create_window(&mut self, desc: &WindowDesc, parent: Option<HWND>, state: Option<*mut c_void>) -> Result<HWND> {
        unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                &HSTRING::from(desc.class),
                &HSTRING::from(desc.title),
                desc.style,
                desc.x,
                desc.y,
                desc.width,
                desc.height,
                parent,
                desc.id.map(|id| HMENU(id as usize as *mut _)),
                Some(self.hinstance.into()),
                state.map(|state| state as *const c_void),
            )
        }
    }

    fn destroy_window(&mut self, hwnd: HWND) {
        unsafe {
            DestroyWindow(hwnd).unwrap_or_default();
        }
    }

    fn show_window(&mut self, hwnd: HWND, show: SHOW_WINDOW_CMD) {
        unsafe {
            let _ = ShowWindow(hwnd, show);
            let _ = UpdateWindow(hwnd);
        }
    }
}

#[derive(Debug, Default)]
pub struct Win32Queue;

impl MessageQueue for Win32Queue {
    fn pull(&mut self) -> Pulled {
        let mut message = MSG::default();
        // GetMessageW yields -1 on failure, which a plain bool conversion would treat as a message
        match unsafe { GetMessageW(&mut message, None, 0, 0) }.0 {
            -1 => Pulled::Failed,
            0 => Pulled::Quit(message.wParam.0 as i32),
            _ => Pulled::Message(message),
        }
    }

    fn translate(&mut self, msg: &MSG) {
        unsafe {
            let _ = TranslateMessage(msg);
        }
    }

    fn dispatch(&mut self, msg: &MSG) -> LRESULT {
        unsafe { DispatchMessageW(msg) }
    }
}
