use super::task::Task;

/// Structured notifications emitted by [`super::TodoList`] after each change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    TaskAdded { index: usize, title: String },
    TaskDeleted { index: usize, task: Task },
    TaskToggled { index: usize, completed: bool },
    EditBegun { index: usize, title: String },
    EditSaved { index: usize, title: String },
    EditCanceled { index: usize },
    EditReset { index: usize },
    HintChanged { message: String },
    HintExpired,
    Rejected { operation: &'static str, reason: String },
}

/// Subscriber for [`TodoEvent`]s, e.g. for logging or telemetry
pub trait TodoObserver {
    fn on_event(&mut self, event: &TodoEvent);
}

impl<F> TodoObserver for F
where
    F: FnMut(&TodoEvent),
{
    fn on_event(&mut self, event: &TodoEvent) {
        self(event)
    }
}
