use serde::{Deserialize, Serialize};
use strum::Display;

/// Client-side routes, mapped from exact paths.
///
/// Root policy is sign-in-first: `/` renders the sign-in view. Anything that
/// is not an exact match falls back to [`Route::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Route {
    #[default]
    Signin,
    Signup,
    Dashboard,
    Bookings,
    Resources,
    Settings,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Route::Signin,
            "/signup" => Route::Signup,
            "/dashboard" => Route::Dashboard,
            "/bookings" => Route::Bookings,
            "/resources" => Route::Resources,
            "/settings" => Route::Settings,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Signin => "/",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Bookings => "/bookings",
            Route::Resources => "/resources",
            Route::Settings => "/settings",
            Route::NotFound => "/404",
        }
    }

    /// Whether this route renders inside the persistent layout shell.
    pub fn is_shell_hosted(&self) -> bool {
        !matches!(self, Route::Signin | Route::Signup)
    }

    /// Key-binding mode for this route.
    pub fn mode(&self) -> Mode {
        match self {
            Route::Signin => Mode::Signin,
            Route::Signup => Mode::Signup,
            _ => Mode::Shell,
        }
    }
}

/// Key-binding modes. Form views get their own mode so typing does not
/// collide with shell navigation keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
pub enum Mode {
    Signin,
    Signup,
    #[default]
    Shell,
}

/// A single entry in the side menu. The table is static and immutable for
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: char,
}

/// The side-menu entries, in display order.
pub fn nav_items() -> &'static [NavigationItem] {
    const ITEMS: [NavigationItem; 4] = [
        NavigationItem {
            route: Route::Dashboard,
            label: "Dashboard",
            icon: '◔',
        },
        NavigationItem {
            route: Route::Bookings,
            label: "Bookings",
            icon: '▦',
        },
        NavigationItem {
            route: Route::Resources,
            label: "Resources",
            icon: '⬚',
        },
        NavigationItem {
            route: Route::Settings,
            label: "Settings",
            icon: '⚙',
        },
    ];
    &ITEMS
}

/// Index into [`nav_items`] for the item matching `route`, if any.
pub fn nav_index_of(route: Route) -> Option<usize> {
    nav_items().iter().position(|item| item.route == route)
}
