use std::sync::Arc;

/// A unit of work handed to an [`Executor`]. Tasks may borrow data that lives
/// for the duration of the call that submits them.
pub type Task<'scope> = Box<dyn FnOnce() + Send + 'scope>;

/// A fork-join worker pool, borrowed for the duration of one call.
///
/// The kernel never creates, resizes or shuts down an executor. The same
/// executor may be driven by several callers at once; each `run_all` call
/// must only wait for its own tasks.
pub trait Executor: Send + Sync {
    /// Number of worker threads in the pool, not counting the caller.
    fn num_threads(&self) -> usize;

    /// Runs every task and returns once all of them have finished. The calling
    /// thread may run tasks itself.
    fn run_all<'scope>(&self, tasks: Vec<Task<'scope>>);
}

impl Executor for rayon::ThreadPool {
    fn num_threads(&self) -> usize {
        self.current_num_threads()
    }

    fn run_all<'scope>(&self, tasks: Vec<Task<'scope>>) {
        let mut tasks = tasks.into_iter();
        let Some(first) = tasks.next() else {
            return;
        };
        // The caller keeps the first task instead of idling in the join.
        self.in_place_scope(|scope| {
            for task in tasks {
                scope.spawn(move |_| task());
            }
            first();
        });
    }
}

impl<E: Executor + ?Sized> Executor for Arc<E> {
    fn num_threads(&self) -> usize {
        (**self).num_threads()
    }

    fn run_all<'scope>(&self, tasks: Vec<Task<'scope>>) {
        (**self).run_all(tasks)
    }
}
