use std::{cell::RefCell, future::Future, rc::Rc};

use futures::{
    future::{abortable, AbortHandle},
    FutureExt,
};
use leptos::{on_cleanup, spawn_local, Scope, ScopeDisposer};

use crate::api;

/// Fetch state of a page that loads data when it is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl<T> From<api::Result<T>> for LoadState<T> {
    fn from(result: api::Result<T>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(_) => Self::Failed(api::GENERIC_FAILURE.to_owned()),
        }
    }
}

/// Wrap `fut` so it can be abandoned through the returned [AbortHandle]. The wrapped future
/// yields [None] when it was aborted before completing.
pub fn cancellable<F>(fut: F) -> (impl Future<Output = Option<F::Output>>, AbortHandle)
where
    F: Future,
{
    let (task, handle) = abortable(fut);
    (task.map(Result::ok), handle)
}

/// Spawn `fut` on the UI event loop for as long as the page owning `cx` is mounted. When the
/// scope is cleaned up the task is aborted and `apply` never runs, so late responses cannot
/// touch state of a page that is gone.
pub fn spawn_scoped<F, A>(cx: Scope, fut: F, apply: A)
where
    F: Future + 'static,
    A: FnOnce(F::Output) + 'static,
{
    let (task, handle) = cancellable(fut);
    on_cleanup(cx, move || handle.abort());
    spawn_local(async move {
        match task.await {
            Some(output) => apply(output),
            None => log::debug!("Discarded a response for a page that is no longer shown"),
        }
    });
}

/// Holder for the scope of the page currently shown in a slot of the view. Mounting a new page
/// disposes the scope of the previous one, which runs its cleanups and aborts the tasks it
/// spawned through [spawn_scoped].
#[derive(Clone, Default)]
pub struct PageScope {
    current: Rc<RefCell<Option<ScopeDisposer>>>,
}

impl PageScope {
    /// Dispose the current page scope, then run `f` in a fresh child scope of `cx`
    pub fn mount<T>(&self, cx: Scope, f: impl FnOnce(Scope) -> T) -> T {
        self.release();
        let (output, disposer) = cx.run_child_scope(f);
        *self.current.borrow_mut() = Some(disposer);
        output
    }

    /// Dispose the current page scope, if any
    pub fn release(&self) {
        let previous = self.current.borrow_mut().take();
        if let Some(disposer) = previous {
            disposer.dispose();
        }
    }
}
