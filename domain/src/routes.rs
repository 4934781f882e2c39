//! Screen routing and the sign-in guard.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Users,
    Categories,
    Products,
    Banners,
    Blogs,
    Ingredients,
}

/// Outcome of resolving a location against the sign-in state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    /// Replace the location with this route
    Redirect(Route),
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Users,
        Route::Categories,
        Route::Products,
        Route::Banners,
        Route::Blogs,
        Route::Ingredients,
    ];

    /// Entries shown in the sidebar
    pub const NAVIGATION: [Route; 4] = [
        Route::Dashboard,
        Route::Categories,
        Route::Products,
        Route::Banners,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Users => "/users",
            Route::Categories => "/categories",
            Route::Products => "/products",
            Route::Banners => "/banners",
            Route::Blogs => "/blogs",
            Route::Ingredients => "/ingredients",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Register => "Create admin account",
            Route::Dashboard => "Dashboard",
            Route::Users => "Users",
            Route::Categories => "Categories",
            Route::Products => "Products",
            Route::Banners => "Banners",
            Route::Blogs => "Blogs",
            Route::Ingredients => "Ingredients",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(normalized))
    }

    /// Only reachable while signed out
    pub fn is_auth_screen(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

pub fn resolve(path: &str, authenticated: bool) -> RouteDecision {
    let Some(route) = Route::from_path(path) else {
        return RouteDecision::Redirect(Route::Login);
    };

    match (route.is_auth_screen(), authenticated) {
        (true, true) => RouteDecision::Redirect(Route::Dashboard),
        (false, false) => RouteDecision::Redirect(Route::Login),
        _ => RouteDecision::Render(route),
    }
}
