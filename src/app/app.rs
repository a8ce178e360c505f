use windows::Win32::{
    Foundation::HWND,
    UI::WindowsAndMessaging::SHOW_WINDOW_CMD,
};

use crate::{
    app::{error::StartupError, event_loop::DispatchLoop},
    framework::{MessageQueue, Shell, WindowHost},
    ui::windows::main::MainWindow,
};

pub struct Application<S: Shell> {
    window: Box<MainWindow<S>>,
    show: SHOW_WINDOW_CMD,
}

impl<S: Shell> Application<S> {

    pub fn create(shell: S, show: SHOW_WINDOW_CMD) -> Self {
        Self { window: MainWindow::new(shell), show }
    }

    /// Creates the main window and shows it. Nothing is shown when any step fails.
    pub fn start<H: WindowHost>(&mut self, host: &mut H) -> Result<HWND, StartupError> {
        let hwnd = self.window.create(host)?;
        log::info!("Main window {:?} created, button {:?}", self.window.hwnd(), self.window.button());

        host.show_window(hwnd, self.show);
        Ok(hwnd)
    }

    /// Starts up and pumps messages until the window is gone. Returns the process exit code, 0 on every path.
    pub fn run<H: WindowHost, Q: MessageQueue>(&mut self, host: &mut H, queue: Q) -> i32 {
        if let Err(e) = self.start(host) {
            log::error!("{}", e);
            return 0;
        }

        let mut event_loop = DispatchLoop::new(queue);
        let exit_code = event_loop.run();
        log::info!("Dispatch loop finished with state {:?}", event_loop.state());
        exit_code
    }

    #[allow(dead_code)]
    pub fn window(&self) -> &MainWindow<S> {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use crate::framework::{testing::*, Pulled, Window};
    use windows::Win32::{
        Foundation::LRESULT,
        UI::WindowsAndMessaging::{MSG, SW_SHOWDEFAULT, WM_COMMAND, WM_DESTROY, WM_PAINT},
    };

    #[test]
    fn test_start_shows_main_window() {
        let mut host = FakeHost::new();
        let mut app = Application::create(FakeShell::default(), SW_SHOWDEFAULT);

        let hwnd = app.start(&mut host).unwrap();

        assert_eq!(host.creates(), 2);
        assert_eq!(host.calls.last(), Some(&HostCall::Show(hwnd, SW_SHOWDEFAULT)));
        assert_eq!(app.window().hwnd(), hwnd);
    }

    #[test]
    fn test_failed_window_creation_shows_nothing() {
        let mut host = FakeHost::failing_create_at(0);
        let queue = FakeQueue::with(vec![Pulled::Quit(0)]);
        let mut app = Application::create(FakeShell::default(), SW_SHOWDEFAULT);

        assert_eq!(app.run(&mut host, queue), 0);
        assert_eq!(host.shows(), 0);
    }

    #[test]
    fn test_failed_window_creation_is_repeatable() {
        for _ in 0..2 {
            let mut host = FakeHost::failing_create_at(0);
            let mut app = Application::create(FakeShell::default(), SW_SHOWDEFAULT);
            assert!(matches!(app.start(&mut host), Err(StartupError::CreateWindow(_))));
            assert_eq!(host.shows(), 0);
        }
    }

    #[test]
    fn test_failed_button_creation_shows_nothing() {
        let mut host = FakeHost::failing_create_at(1);
        let mut app = Application::create(FakeShell::default(), SW_SHOWDEFAULT);

        assert!(matches!(app.start(&mut host), Err(StartupError::CreateButton { .. })));
        assert_eq!(host.shows(), 0);

        let mut host = FakeHost::failing_create_at(1);
        let mut app = Application::create(FakeShell::default(), SW_SHOWDEFAULT);
        assert_eq!(app.run(&mut host, FakeQueue::default()), 0);
        assert_eq!(host.shows(), 0);
    }

    #[test]
    fn test_run_exits_with_zero_after_quit() {
        let mut host = FakeHost::new();
        let queue = FakeQueue::with(vec![
            Pulled::Message(message(HWND(0x110 as *mut _), WM_PAINT, 0, 0)),
            Pulled::Quit(3),
        ]);
        let mut app = Application::create(FakeShell::default(), SW_SHOWDEFAULT);

        assert_eq!(app.run(&mut host, queue), 0);
        assert_eq!(host.shows(), 1);
    }

    /// Hands pulled messages to the window procedure the way DispatchMessageW would,
    /// and reports WM_QUIT once the window has posted it.
    struct RoutingQueue<'a> {
        window: &'a mut MainWindow<FakeShell>,
        inbox: VecDeque<Pulled>,
    }

    impl MessageQueue for RoutingQueue<'_> {
        fn pull(&mut self) -> Pulled {
            if let Some(&code) = self.window.shell().quits.borrow().first() {
                return Pulled::Quit(code);
            }
            self.inbox.pop_front().unwrap_or(Pulled::Failed)
        }

        fn translate(&mut self, _msg: &MSG) {}

        fn dispatch(&mut self, msg: &MSG) -> LRESULT {
            self.window
                .handle_message(msg.hwnd, msg.message, msg.wParam, msg.lParam)
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_clicks_then_destroy_terminate_loop() {
        let mut window = MainWindow::new(FakeShell::default());
        let hwnd = HWND(0x200 as *mut _);
        window.set_hwnd(hwnd);
        let click = message(hwnd, WM_COMMAND, 1, 0);

        let exit_code = {
            let queue = RoutingQueue {
                window: &mut window,
                inbox: VecDeque::from(vec![
                    Pulled::Message(click),
                    Pulled::Message(click),
                    Pulled::Message(message(hwnd, WM_DESTROY, 0, 0)),
                    Pulled::Message(click),
                ]),
            };
            DispatchLoop::new(queue).run()
        };

        assert_eq!(exit_code, 0);
        assert_eq!(window.shell().boxes.borrow().len(), 2);
        assert_eq!(*window.shell().quits.borrow(), vec![0]);
    }
}
