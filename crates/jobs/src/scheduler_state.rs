use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a periodic job: `Idle -> Waiting -> Running -> Waiting -> ... -> Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Waiting,
    Running,
    Stopped,
}

impl SchedulerState {
    fn as_u8(self) -> u8 {
        match self {
            SchedulerState::Idle => 0,
            SchedulerState::Waiting => 1,
            SchedulerState::Running => 2,
            SchedulerState::Stopped => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => SchedulerState::Waiting,
            2 => SchedulerState::Running,
            3 => SchedulerState::Stopped,
            _ => SchedulerState::Idle,
        }
    }
}

#[derive(Debug)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(SchedulerState::Idle.as_u8()))
    }

    pub(crate) fn get(&self) -> SchedulerState {
        SchedulerState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn set(&self, state: SchedulerState) {
        self.0.store(state.as_u8(), Ordering::Release);
    }
}
