use crate::domain::nav::Route;

/// Current navigation position. A pure function of the last navigation
/// request; unknown paths resolve to [`Route::NotFound`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteState {
    pub current: Route,
}

impl RouteState {
    pub fn navigate(&mut self, path: &str) -> Route {
        self.current = Route::from_path(path);
        self.current
    }
}
