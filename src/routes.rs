//! Hash Routing
//!
//! Route enum plus parse/format for `location.hash`. A global hashchange
//! listener bound once at startup feeds the route signal.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Application route
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Project(String),
}

impl Route {
    /// Parse a `location.hash` value. Anything unrecognized lands on Home.
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        match path.strip_prefix("project/") {
            Some(id) if !id.is_empty() => Route::Project(id.to_string()),
            _ => Route::Home,
        }
    }

    /// Hash fragment for this route, leading `#` included
    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Project(id) => format!("#/project/{id}"),
        }
    }
}

/// Route for the current `location.hash`
pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

/// Navigate by writing `location.hash`; the hashchange listener moves the
/// route signal.
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&route.to_hash());
    }
}

/// Create the route signal and bind the global hashchange listener.
/// Call once from App.
pub fn create_router() -> ReadSignal<Route> {
    let (route, set_route) = signal(current_route());

    let on_hashchange = Closure::<dyn FnMut()>::new(move || {
        set_route.set(current_route());
    });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    on_hashchange.forget();

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_bare_hashes_land_on_home() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
    }

    #[test]
    fn project_hash_carries_the_id() {
        assert_eq!(
            Route::from_hash("#/project/66b1"),
            Route::Project("66b1".to_string())
        );
    }

    #[test]
    fn junk_hashes_land_on_home() {
        assert_eq!(Route::from_hash("#/nope"), Route::Home);
        assert_eq!(Route::from_hash("#/project/"), Route::Home);
        assert_eq!(Route::from_hash("#projects"), Route::Home);
    }

    #[test]
    fn hash_round_trips() {
        for route in [Route::Home, Route::Project("abc123".to_string())] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }
}
