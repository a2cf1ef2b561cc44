/// Named screens of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Route {
    /// Home screen with carousel, navigation grid and shows.
    Home,
    /// Exhibit detail screen with the parallax video header.
    ExhibitDetail,
}

impl Route {
    /// Stable screen name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::ExhibitDetail => "ExhibitDetail",
        }
    }
}

/// Router collaborator. Only called in response to explicit user taps.
pub trait Navigator {
    /// Push `route` on top of the current screen.
    fn navigate_to(&mut self, route: Route);
    /// Pop the current screen. Returns `false` when already at the root.
    fn go_back(&mut self) -> bool;
}

/// Push/pop route stack rooted at [`Route::Home`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackNavigator {
    stack: Vec<Route>,
}

impl Default for StackNavigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }
}

impl StackNavigator {
    /// Stack holding only the home screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen on top of the stack.
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Home)
    }

    /// Number of screens on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Navigator for StackNavigator {
    fn navigate_to(&mut self, route: Route) {
        // Navigating to the screen already on top does not stack a duplicate.
        if self.current() != route {
            tracing::debug!(route = route.name(), "navigate");
            self.stack.push(route);
        }
    }

    fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let popped = self.stack.pop();
        tracing::debug!(?popped, "go back");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/navigation.rs"]
mod tests;
