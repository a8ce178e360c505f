use windows::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::*,
};

use super::traits::Window;

/// Window procedure registered with every class backed by a [`Window`] object.
///
/// The object pointer travels in `CREATESTRUCTW::lpCreateParams`, is parked in
/// `GWLP_USERDATA` on `WM_NCCREATE` and dropped from there on `WM_NCDESTROY`,
/// when the object also forgets its handle.
/// Messages that arrive before `WM_NCCREATE` (e.g. `WM_GETMINMAXINFO`) go to
/// `DefWindowProcW`.
pub unsafe extern "system" fn wnd_proc_router<T: Window>(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {

    log_message(hwnd, msg, wparam, lparam);

    if msg == WM_NCCREATE {
        let cs = &*(lparam.0 as *const CREATESTRUCTW);
        let this = cs.lpCreateParams as *mut T;
        if !this.is_null() {
            (*this).set_hwnd(hwnd);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, this as isize);
        }
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    let this_ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut T;
    if this_ptr.is_null() {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    if msg == WM_NCDESTROY {
        (*this_ptr).set_hwnd(HWND::default());
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    let this = &mut *this_ptr;
    let result = this
        .handle_message(hwnd, msg, wparam, lparam)
        .unwrap_or_else(|| DefWindowProcW(hwnd, msg, wparam, lparam));

    log_response(hwnd, msg, result);

    result
}

fn log_message(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) {
    log::trace!("Got Message ({})({:?}): {} wp {:#x} lp {:#x}", msg, hwnd, msg_name(msg), wparam.0, lparam.0);
}

fn log_response(hwnd: HWND, msg: u32, lresult: LRESULT) {
    log::trace!("Got Response ({}): {:?} @ {:?}", msg_name(msg), lresult, hwnd);
}

pub fn msg_name(msg: u32) -> &'static str {
    match msg {
        WM_NULL              => "WM_NULL",
        WM_CREATE            => "WM_CREATE",
        WM_DESTROY           => "WM_DESTROY",
        WM_MOVE              => "WM_MOVE",
        WM_SIZE              => "WM_SIZE",
        WM_ACTIVATE          => "WM_ACTIVATE",
        WM_SETFOCUS          => "WM_SETFOCUS",
        WM_KILLFOCUS         => "WM_KILLFOCUS",
        WM_ENABLE            => "WM_ENABLE",
        WM_SETTEXT           => "WM_SETTEXT",
        WM_GETTEXT           => "WM_GETTEXT",
        WM_PAINT             => "WM_PAINT",
        WM_CLOSE             => "WM_CLOSE",
        WM_QUIT              => "WM_QUIT",
        WM_ERASEBKGND        => "WM_ERASEBKGND",
        WM_SHOWWINDOW        => "WM_SHOWWINDOW",
        WM_ACTIVATEAPP       => "WM_ACTIVATEAPP",
        WM_SETCURSOR         => "WM_SETCURSOR",
        WM_MOUSEACTIVATE     => "WM_MOUSEACTIVATE",
        WM_GETMINMAXINFO     => "WM_GETMINMAXINFO",
        WM_SETFONT           => "WM_SETFONT",
        WM_GETFONT           => "WM_GETFONT",
        WM_WINDOWPOSCHANGING => "WM_WINDOWPOSCHANGING",
        WM_WINDOWPOSCHANGED  => "WM_WINDOWPOSCHANGED",
        WM_NOTIFY            => "WM_NOTIFY",
        WM_GETICON           => "WM_GETICON",
        WM_NCCREATE          => "WM_NCCREATE",
        WM_NCDESTROY         => "WM_NCDESTROY",
        WM_NCCALCSIZE        => "WM_NCCALCSIZE",
        WM_NCHITTEST         => "WM_NCHITTEST",
        WM_NCPAINT           => "WM_NCPAINT",
        WM_NCACTIVATE        => "WM_NCACTIVATE",
        WM_GETDLGCODE        => "WM_GETDLGCODE",
        WM_NCMOUSEMOVE       => "WM_NCMOUSEMOVE",
        WM_NCLBUTTONDOWN     => "WM_NCLBUTTONDOWN",
        WM_KEYDOWN           => "WM_KEYDOWN",
        WM_KEYUP             => "WM_KEYUP",
        WM_CHAR              => "WM_CHAR",
        WM_SYSKEYDOWN        => "WM_SYSKEYDOWN",
        WM_SYSKEYUP          => "WM_SYSKEYUP",
        WM_INITDIALOG        => "WM_INITDIALOG",
        WM_COMMAND           => "WM_COMMAND",
        WM_SYSCOMMAND        => "WM_SYSCOMMAND",
        WM_TIMER             => "WM_TIMER",
        WM_CHANGEUISTATE     => "WM_CHANGEUISTATE",
        WM_UPDATEUISTATE     => "WM_UPDATEUISTATE",
        WM_CTLCOLORBTN       => "WM_CTLCOLORBTN",
        WM_CTLCOLORSTATIC    => "WM_CTLCOLORSTATIC",
        WM_MOUSEMOVE         => "WM_MOUSEMOVE",
        WM_LBUTTONDOWN       => "WM_LBUTTONDOWN",
        WM_LBUTTONUP         => "WM_LBUTTONUP",
        WM_RBUTTONDOWN       => "WM_RBUTTONDOWN",
        WM_RBUTTONUP         => "WM_RBUTTONUP",
        WM_MOUSEWHEEL        => "WM_MOUSEWHEEL",
        WM_PARENTNOTIFY      => "WM_PARENTNOTIFY",
        WM_ENTERSIZEMOVE     => "WM_ENTERSIZEMOVE",
        WM_EXITSIZEMOVE      => "WM_EXITSIZEMOVE",
        WM_CAPTURECHANGED    => "WM_CAPTURECHANGED",
        WM_MOVING            => "WM_MOVING",
        WM_SIZING            => "WM_SIZING",
        WM_DPICHANGED        => "WM_DPICHANGED",
        WM_PRINTCLIENT       => "WM_PRINTCLIENT",
        WM_USER..=0x7FFF     => "WM_USER+",
        WM_APP..=0xBFFF      => "WM_APP+",
        _                    => "UNKNOWN"
    }
}
