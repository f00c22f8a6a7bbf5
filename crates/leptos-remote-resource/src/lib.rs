//! Leptos Remote Resource
//!
//! One-shot list/detail fetching for Leptos with an explicit status state
//! machine. A fetch epoch drops responses that resolve after a newer fetch
//! for the same resource has started, or after the consuming view is gone.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

/// Lifecycle phase of one fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// State of one asynchronous acquisition.
///
/// The payload exists only in `Success` and the message only in `Error`,
/// so the status/data/error invariants hold by construction.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Success(_) => FetchStatus::Success,
            FetchState::Error(_) => FetchStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// True before a result has arrived (idle or loading).
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> FetchState<Vec<T>> {
    /// Resolved items; empty unless the fetch succeeded.
    pub fn items(&self) -> &[T] {
        match self {
            FetchState::Success(items) => items,
            _ => &[],
        }
    }

    /// A successful fetch that returned zero items. Valid, and not an error.
    pub fn is_empty_success(&self) -> bool {
        matches!(self, FetchState::Success(items) if items.is_empty())
    }
}

/// Handle identifying one started fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Decides which in-flight fetch is authoritative: only the most recently
/// started one may write its result back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchEpoch(u64);

impl FetchEpoch {
    /// Start a new fetch, invalidating every earlier token.
    pub fn begin(&mut self) -> FetchToken {
        self.0 += 1;
        FetchToken(self.0)
    }

    pub fn admits(&self, token: FetchToken) -> bool {
        token.0 == self.0
    }
}

/// Signal bundle exposing one remote resource to consumers.
pub struct RemoteResource<T: 'static> {
    /// Current state of the acquisition.
    pub state: ReadSignal<FetchState<T>>,
    set_refresh: WriteSignal<u32>,
}

impl<T: 'static> Clone for RemoteResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteResource<T> {}

impl<T: Clone + Send + Sync + 'static> RemoteResource<T> {
    pub fn get(&self) -> FetchState<T> {
        self.state.get()
    }

    /// Explicitly re-run the fetch for the current key. The only retry
    /// path: a failed fetch stays `Error` until this is called or the
    /// consumer remounts.
    pub fn refetch(&self) {
        self.set_refresh.update(|n| *n += 1);
    }
}

/// Create a resource that fetches once per distinct key (and once per
/// explicit `refetch`), exposing a [`FetchState`] signal.
///
/// On every new key the state goes to `Loading` immediately and the fetch
/// runs via `spawn_local`. When it completes, the result is applied only if
/// no newer fetch has started since and the consuming view still exists;
/// otherwise it is dropped silently.
pub fn create_remote_resource<T, K, Fut, KF, FF>(key: KF, fetch: FF) -> RemoteResource<T>
where
    T: Clone + Send + Sync + 'static,
    K: Clone + PartialEq + Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
    KF: Fn() -> K + Send + Sync + 'static,
    FF: Fn(K) -> Fut + Copy + Send + Sync + 'static,
{
    let (state, set_state) = signal(FetchState::<T>::Idle);
    let (epoch, set_epoch) = signal(FetchEpoch::default());
    let (refresh, set_refresh) = signal(0u32);

    Effect::new(move |prev: Option<(K, u32)>| {
        let current_key = key();
        let refresh_count = refresh.get();

        // One network call per distinct key per mount, absent an explicit
        // refresh.
        if let Some((prev_key, prev_refresh)) = &prev {
            if *prev_key == current_key && *prev_refresh == refresh_count {
                return (current_key, refresh_count);
            }
        }

        let Some(token) = set_epoch.try_update(|e| e.begin()) else {
            return (current_key, refresh_count);
        };
        set_state.set(FetchState::Loading);

        let fetch_key = current_key.clone();
        spawn_local(async move {
            let result = fetch(fetch_key).await;

            // Stale response, or the consumer was torn down: no-op.
            match epoch.try_get_untracked() {
                Some(current) if current.admits(token) => {}
                _ => return,
            }

            let next = match result {
                Ok(value) => FetchState::Success(value),
                Err(message) => FetchState::Error(message),
            };
            set_state.try_set(next);
        });

        (current_key, refresh_count)
    });

    RemoteResource { state, set_refresh }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_holds_items_and_no_error() {
        let state = FetchState::Success(vec![1, 2, 3]);
        assert_eq!(state.status(), FetchStatus::Success);
        assert_eq!(state.items(), &[1, 2, 3]);
        assert!(state.error_detail().is_none());
    }

    #[test]
    fn error_holds_message_and_no_items() {
        let state = FetchState::<Vec<u32>>::Error("Network Error".to_string());
        assert_eq!(state.status(), FetchStatus::Error);
        assert_eq!(state.error_detail(), Some("Network Error"));
        assert!(state.items().is_empty());
    }

    #[test]
    fn empty_success_is_not_an_error() {
        let state = FetchState::<Vec<u32>>::Success(Vec::new());
        assert_eq!(state.status(), FetchStatus::Success);
        assert!(state.is_empty_success());
        assert!(state.error_detail().is_none());
    }

    #[test]
    fn pending_covers_idle_and_loading() {
        assert!(FetchState::<Vec<u32>>::Idle.is_pending());
        assert!(FetchState::<Vec<u32>>::Loading.is_pending());
        assert!(!FetchState::Success(vec![1]).is_pending());
        assert!(!FetchState::<Vec<u32>>::Error("boom".into()).is_pending());
    }

    #[test]
    fn newer_fetch_invalidates_older_token() {
        let mut epoch = FetchEpoch::default();

        // Fetch A starts for key K1, then fetch B starts for key K2.
        let token_a = epoch.begin();
        let token_b = epoch.begin();

        // B resolves first and is applied; A's late resolution is refused.
        assert!(epoch.admits(token_b));
        assert!(!epoch.admits(token_a));
    }

    #[test]
    fn token_stays_valid_until_superseded() {
        let mut epoch = FetchEpoch::default();
        let token = epoch.begin();
        assert!(epoch.admits(token));

        let newer = epoch.begin();
        assert!(!epoch.admits(token));
        assert!(epoch.admits(newer));
    }

    #[test]
    fn resolution_sequence_matches_lifecycle() {
        // The effect applies these transitions around each fetch; mirror
        // them here against the enum directly.
        let mut epoch = FetchEpoch::default();
        let token = epoch.begin();
        let mut state = FetchState::<Vec<&str>>::Loading;
        assert!(state.is_loading());

        if epoch.admits(token) {
            state = FetchState::Success(vec!["a", "b"]);
        }
        assert_eq!(state.items(), &["a", "b"]);
        assert!(state.error_detail().is_none());
    }
}
