//! Page navigation and the logged-in user.
//!
//! A small state machine over the five pages. Logins accept any name and
//! always succeed; they only decide which dashboard is shown.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Landing page with the two login choices.
    Landing,
    /// Student login form.
    StudentLogin,
    /// Admin login form.
    AdminLogin,
    /// Read-only student dashboard.
    StudentDashboard,
    /// Admin dashboard with record management.
    AdminDashboard,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Landing => write!(f, "landing"),
            Self::StudentLogin => write!(f, "student-login"),
            Self::AdminLogin => write!(f, "admin-login"),
            Self::StudentDashboard => write!(f, "student-dashboard"),
            Self::AdminDashboard => write!(f, "admin-dashboard"),
        }
    }
}

impl Page {
    /// Whether this is one of the login forms.
    #[must_use]
    pub fn is_login(self) -> bool {
        matches!(self, Self::StudentLogin | Self::AdminLogin)
    }

    /// Whether this is one of the dashboards.
    #[must_use]
    pub fn is_dashboard(self) -> bool {
        matches!(self, Self::StudentDashboard | Self::AdminDashboard)
    }
}

/// Which kind of user logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A student.
    Student,
    /// A placement-cell admin.
    Admin,
}

impl Role {
    /// The login page for this role.
    #[must_use]
    pub fn login_page(self) -> Page {
        match self {
            Self::Student => Page::StudentLogin,
            Self::Admin => Page::AdminLogin,
        }
    }

    /// The dashboard for this role.
    #[must_use]
    pub fn dashboard(self) -> Page {
        match self {
            Self::Student => Page::StudentDashboard,
            Self::Admin => Page::AdminDashboard,
        }
    }

    /// Name shown when the login form was left blank.
    #[must_use]
    pub fn default_name(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Admin => "Admin",
        }
    }
}

/// The current user. Carries no credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Display name from the login form.
    pub name: String,
    /// Student or admin.
    pub role: Role,
}

/// Current page and user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    page: Page,
    user: Option<User>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start on the landing page with nobody logged in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: Page::Landing,
            user: None,
        }
    }

    /// The page being shown.
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Follow a link from the landing page, or go back from a login form.
    ///
    /// Dashboards are only reachable through [`Session::login`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] for any other move; the page is
    /// left unchanged.
    pub fn navigate(&mut self, to: Page) -> Result<()> {
        let allowed = match (self.page, to) {
            (Page::Landing, Page::StudentLogin | Page::AdminLogin) => true,
            (from, Page::Landing) => from.is_login(),
            _ => false,
        };
        if !allowed {
            return Err(Error::InvalidTransition {
                from: self.page,
                to,
            });
        }
        debug!(from = %self.page, %to, "Navigate");
        self.page = to;
        Ok(())
    }

    /// Return from a login form to the landing page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if not on a login form.
    pub fn back(&mut self) -> Result<()> {
        self.navigate(Page::Landing)
    }

    /// Submit the current login form with any name.
    ///
    /// A blank name falls back to the role's default name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if not on a login form.
    pub fn login(&mut self, name: &str) -> Result<&User> {
        let role = match self.page {
            Page::StudentLogin => Role::Student,
            Page::AdminLogin => Role::Admin,
            from => {
                return Err(Error::InvalidTransition {
                    from,
                    to: Page::StudentDashboard,
                })
            }
        };
        let name = name.trim();
        let name = if name.is_empty() {
            role.default_name().to_string()
        } else {
            name.to_string()
        };

        debug!(from = %self.page, to = %role.dashboard(), user = %name, "Login");
        self.page = role.dashboard();
        let user = self.user.insert(User { name, role });
        Ok(&*user)
    }

    /// Walk from the landing page through `role`'s login form to its dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if not on the landing page.
    pub fn enter(&mut self, role: Role, name: &str) -> Result<&User> {
        self.navigate(role.login_page())?;
        self.login(name)
    }

    /// Leave a dashboard, clearing the user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if not on a dashboard.
    pub fn logout(&mut self) -> Result<()> {
        if !self.page.is_dashboard() {
            return Err(Error::InvalidTransition {
                from: self.page,
                to: Page::Landing,
            });
        }
        debug!(from = %self.page, "Logout");
        self.page = Page::Landing;
        self.user = None;
        Ok(())
    }

    /// The user, provided the session is on `role`'s dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoggedIn`] otherwise.
    pub fn require(&self, role: Role) -> Result<&User> {
        match &self.user {
            Some(user) if user.role == role && self.page == role.dashboard() => Ok(user),
            _ => Err(Error::NotLoggedIn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_landing() {
        let session = Session::new();
        assert_eq!(session.page(), Page::Landing);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_student_flow() {
        let mut session = Session::new();
        session.navigate(Page::StudentLogin).unwrap();
        let user = session.login("Asha").unwrap().clone();

        assert_eq!(user.role, Role::Student);
        assert_eq!(user.name, "Asha");
        assert_eq!(session.page(), Page::StudentDashboard);
        assert!(session.require(Role::Student).is_ok());
        assert!(session.require(Role::Admin).is_err());

        session.logout().unwrap();
        assert_eq!(session.page(), Page::Landing);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_admin_flow() {
        let mut session = Session::new();
        session.enter(Role::Admin, "Dean").unwrap();
        assert_eq!(session.page(), Page::AdminDashboard);
        assert_eq!(session.require(Role::Admin).unwrap().name, "Dean");
    }

    #[test]
    fn test_login_accepts_blank_name() {
        let mut session = Session::new();
        let user = session.enter(Role::Student, "   ").unwrap();
        assert_eq!(user.name, "Student");
    }

    #[test]
    fn test_back_from_login() {
        let mut session = Session::new();
        session.navigate(Page::AdminLogin).unwrap();
        session.back().unwrap();
        assert_eq!(session.page(), Page::Landing);
    }

    #[test]
    fn test_dashboard_not_reachable_by_navigation() {
        let mut session = Session::new();
        let err = session.navigate(Page::AdminDashboard).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransition {
                from: Page::Landing,
                to: Page::AdminDashboard
            }
        ));
        assert_eq!(session.page(), Page::Landing);
    }

    #[test]
    fn test_invalid_transitions_leave_state() {
        let mut session = Session::new();
        assert!(session.back().is_err());
        assert!(session.logout().is_err());
        assert!(session.login("x").is_err());

        session.navigate(Page::StudentLogin).unwrap();
        assert!(session.navigate(Page::AdminLogin).is_err());
        assert_eq!(session.page(), Page::StudentLogin);

        session.login("Asha").unwrap();
        assert!(session.navigate(Page::Landing).is_err());
        assert!(session.back().is_err());
        assert_eq!(session.page(), Page::StudentDashboard);
    }

    #[test]
    fn test_require_without_login() {
        let session = Session::new();
        assert!(matches!(
            session.require(Role::Student),
            Err(Error::NotLoggedIn)
        ));
    }

    #[test]
    fn test_page_display() {
        assert_eq!(Page::Landing.to_string(), "landing");
        assert_eq!(Page::StudentLogin.to_string(), "student-login");
        assert_eq!(Page::AdminDashboard.to_string(), "admin-dashboard");
    }
}
