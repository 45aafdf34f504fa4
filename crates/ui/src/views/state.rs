use std::future::Future;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The remote service could not be reached or refused the request.
    Unavailable,
    NotFound,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unavailable => "Không thể tải dữ liệu",
            Self::NotFound => "Không tìm thấy dữ liệu",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(ViewError),
}

/// Run `load` once on mount into a writable view state.
///
/// Unlike a resource, the loaded value can be edited in place afterwards,
/// which the game screens rely on. Restart the returned future to reload.
pub fn use_loader<T, F, Fut>(mut load: F) -> (Signal<ViewState<T>>, UseFuture)
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ViewError>> + 'static,
{
    let mut state = use_signal(|| ViewState::Loading);
    let future = use_future(move || {
        let pending = load();
        async move {
            state.set(ViewState::Loading);
            let next = match pending.await {
                Ok(value) => ViewState::Ready(value),
                Err(err) => ViewState::Error(err),
            };
            state.set(next);
        }
    });
    (state, future)
}

/// Mutate the loaded value, if any.
pub fn with_ready<T: 'static, R>(
    mut state: Signal<ViewState<T>>,
    f: impl FnOnce(&mut T) -> R,
) -> Option<R> {
    match &mut *state.write() {
        ViewState::Ready(value) => Some(f(value)),
        _ => None,
    }
}
