//! Recording stand-ins for the platform traits.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::c_void;

use windows::{
    core::{Error, Result},
    Win32::{
        Foundation::{E_FAIL, HWND, LPARAM, LRESULT, WPARAM},
        UI::WindowsAndMessaging::{MSG, SHOW_WINDOW_CMD},
    },
};

use super::traits::{MessageQueue, Pulled, Shell, WindowClass, WindowDesc, WindowHost};

/// What `FakeShell::default_proc` answers, derived from its inputs so pass-through can be checked.
pub fn default_result(msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    LRESULT(0x1000 + msg as isize * 7 + wparam.0 as isize * 3 + lparam.0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownBox {
    pub owner: HWND,
    pub text: String,
    pub caption: String,
}

#[derive(Default)]
pub struct FakeShell {
    pub default_calls: RefCell<Vec<u32>>,
    pub quits: RefCell<Vec<i32>>,
    pub boxes: RefCell<Vec<ShownBox>>,
}

impl Shell for FakeShell {
    fn default_proc(&self, _hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
        self.default_calls.borrow_mut().push(msg);
        default_result(msg, wparam, lparam)
    }

    fn post_quit(&self, exit_code: i32) {
        self.quits.borrow_mut().push(exit_code);
    }

    fn information_box(&self, owner: HWND, text: &str, caption: &str) {
        self.boxes.borrow_mut().push(ShownBox {
            owner,
            text: text.to_string(),
            caption: caption.to_string(),
        });
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    Register(&'static str),
    Create { desc: WindowDesc, parent: Option<HWND>, with_state: bool },
    Destroy(HWND),
    Show(HWND, SHOW_WINDOW_CMD),
}

pub struct FakeHost {
    pub calls: Vec<HostCall>,
    /// Zero-based index of the `create_window` call that fails, if any.
    pub fail_create_at: Option<usize>,
    pub fail_register: bool,
    next_handle: usize,
}

impl FakeHost {
    pub fn new() -> Self {
        Self { calls: Vec::new(), fail_create_at: None, fail_register: false, next_handle: 0x100 }
    }

    pub fn failing_create_at(index: usize) -> Self {
        Self { fail_create_at: Some(index), ..Self::new() }
    }

    pub fn creates(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, HostCall::Create { .. })).count()
    }

    pub fn shows(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, HostCall::Show(..))).count()
    }
}

impl WindowHost for FakeHost {
    fn register_class(&mut self, class: &WindowClass) -> Result<()> {
        self.calls.push(HostCall::Register(class.name));
        if self.fail_register {
            return Err(Error::from_hresult(E_FAIL));
        }
        Ok(())
    }

    fn create_window(&mut self, desc: &WindowDesc, parent: Option<HWND>, state: Option<*mut c_void>) -> Result<HWND> {
        let index = self.creates();
        self.calls.push(HostCall::Create { desc: *desc, parent, with_state: state.is_some() });
        if self.fail_create_at == Some(index) {
            return Err(Error::from_hresult(E_FAIL));
        }
        self.next_handle += 0x10;
        Ok(HWND(self.next_handle as *mut _))
    }

    fn destroy_window(&mut self, hwnd: HWND) {
        self.calls.push(HostCall::Destroy(hwnd));
    }

    fn show_window(&mut self, hwnd: HWND, show: SHOW_WINDOW_CMD) {
        self.calls.push(HostCall::Show(hwnd, show));
    }
}

/// Replays a fixed script of pulls; an exhausted script reads as `Failed`.
#[derive(Default)]
pub struct FakeQueue {
    pub script: VecDeque<Pulled>,
    pub pulled: usize,
    pub translated: Vec<u32>,
    pub dispatched: Vec<u32>,
}

impl FakeQueue {
    pub fn with(script: Vec<Pulled>) -> Self {
        Self { script: script.into(), ..Default::default() }
    }
}

impl MessageQueue for FakeQueue {
    fn pull(&mut self) -> Pulled {
        self.pulled += 1;
        self.script.pop_front().unwrap_or(Pulled::Failed)
    }

    fn translate(&mut self, msg: &MSG) {
        self.translated.push(msg.message);
    }

    fn dispatch(&mut self, msg: &MSG) -> LRESULT {
        self.dispatched.push(msg.message);
        LRESULT(0)
    }
}

pub fn message(hwnd: HWND, msg: u32, wparam: usize, lparam: isize) -> MSG {
    MSG { hwnd, message: msg, wParam: WPARAM(wparam), lParam: LPARAM(lparam), ..Default::default() }
}
