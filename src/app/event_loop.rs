use crate::framework::{MessageQueue, Pulled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Pulls messages off the thread queue and hands them to their window procedures until `WM_QUIT`.
pub struct DispatchLoop<Q: MessageQueue> {
    queue: Q,
    state: LoopState,
}

impl<Q: MessageQueue> DispatchLoop<Q> {
    pub fn new(queue: Q) -> Self {
        Self { queue, state: LoopState::Running }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    #[allow(dead_code)]
    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn step(&mut self) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        match self.queue.pull() {
            Pulled::Message(msg) => {
                self.queue.translate(&msg);
                self.queue.dispatch(&msg);
            }
            Pulled::Quit(code) => {
                log::info!("WM_QUIT received (code {})", code);
                self.state = LoopState::Terminated;
            }
            Pulled::Failed => {
                log::error!("Message queue failure, leaving dispatch loop");
                self.state = LoopState::Terminated;
            }
        }
        self.state
    }

    /// Runs to termination. The exit code is always 0, whatever `WM_QUIT` carried.
    pub fn run(&mut self) -> i32 {
        while self.step() == LoopState::Running {}
        0
    }
}
