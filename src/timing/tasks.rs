//! Timing domain: cancellable one-shot and repeating deferred tasks.

/// Handle returned when scheduling, used to cancel a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u32);

#[derive(Debug, Clone)]
struct ScheduledTask<T> {
    id: TaskId,
    remaining: f32,
    /// Repeat period; `None` for one-shot tasks
    interval: Option<f32>,
    task: T,
}

/// Per-owner list of deferred tasks examined every frame.
///
/// `tick` returns the tasks that came due, in scheduling order. Repeating
/// tasks fire at most once per tick and stay queued until cancelled.
#[derive(Debug, Clone)]
pub struct TaskQueue<T> {
    next_id: u32,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T: Clone> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once after `delay` seconds.
    pub fn schedule(&mut self, delay: f32, task: T) -> TaskId {
        self.push(delay, None, task)
    }

    /// Run `task` after `delay`, then every `interval` seconds.
    pub fn schedule_repeating(&mut self, delay: f32, interval: f32, task: T) -> TaskId {
        self.push(delay, Some(interval.max(f32::EPSILON)), task)
    }

    fn push(&mut self, delay: f32, interval: Option<f32>, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tasks.push(ScheduledTask {
            id,
            remaining: delay,
            interval,
            task,
        });
        id
    }

    /// Returns false if the task already ran or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&T) -> bool) {
        self.tasks.retain(|t| !predicate(&t.task));
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Advance every task by `dt` and collect the ones that came due.
    pub fn tick(&mut self, dt: f32) -> Vec<T> {
        let mut due = Vec::new();

        for scheduled in &mut self.tasks {
            scheduled.remaining -= dt;
            if scheduled.remaining <= 0.0 {
                due.push(scheduled.task.clone());
                if let Some(interval) = scheduled.interval {
                    scheduled.remaining += interval;
                    if scheduled.remaining <= 0.0 {
                        scheduled.remaining = interval;
                    }
                }
            }
        }

        self.tasks
            .retain(|t| t.interval.is_some() || t.remaining > 0.0);

        due
    }
}
