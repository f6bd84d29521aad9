//! Route surface and role gate
//!
//! The client route table and the role-based redirect rules. Gating lives
//! here, not in the backend: the service trusts its callers, and the UI
//! redirects unauthenticated or wrong-role visitors before any call is made.

use shared::models::{Role, User};

pub const HOME: &str = "/";
pub const CHECKOUT: &str = "/checkout";
pub const LOGIN: &str = "/login";
pub const ORDER_SUCCESS: &str = "/order-success";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const ADMIN_MENU: &str = "/admin/menu";
pub const ADMIN_ORDERS: &str = "/admin/orders";
pub const ADMIN_SETTINGS: &str = "/admin/settings";
pub const ATTENDANT_ORDERS: &str = "/attendant/orders";

/// Landing path after sign-in, per role
pub fn default_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD,
        Role::Attendant => ATTENDANT_ORDERS,
        Role::Customer => HOME,
    }
}

/// Outcome of a route-guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(&'static str),
}

/// Role gate for the admin and attendant areas
///
/// Admin routes admit only ADMIN; attendant routes admit ATTENDANT and
/// ADMIN. Everything else is public. Unauthenticated visitors go to the
/// login page; signed-in visitors with the wrong role go to their own
/// default path.
pub struct RouteGuard;

impl RouteGuard {
    pub fn check(route: &str, user: Option<&User>) -> Access {
        let allowed: &[Role] = if route.starts_with("/admin") {
            &[Role::Admin]
        } else if route.starts_with("/attendant") {
            &[Role::Attendant, Role::Admin]
        } else {
            return Access::Granted;
        };

        match user {
            None => Access::Redirect(LOGIN),
            Some(user) if allowed.contains(&user.role) => Access::Granted,
            Some(user) => Access::Redirect(default_path(user.role)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".into(),
            email: "u1@gourmetgo.com".into(),
            role,
            name: None,
        }
    }

    #[test]
    fn public_routes_are_open_to_everyone() {
        assert_eq!(RouteGuard::check(HOME, None), Access::Granted);
        assert_eq!(RouteGuard::check(CHECKOUT, None), Access::Granted);
        let customer = user(Role::Customer);
        assert_eq!(RouteGuard::check(ORDER_SUCCESS, Some(&customer)), Access::Granted);
    }

    #[test]
    fn gated_routes_redirect_anonymous_visitors_to_login() {
        assert_eq!(RouteGuard::check(ADMIN_DASHBOARD, None), Access::Redirect(LOGIN));
        assert_eq!(RouteGuard::check(ATTENDANT_ORDERS, None), Access::Redirect(LOGIN));
    }

    #[test]
    fn wrong_role_redirects_to_own_default_path() {
        let attendant = user(Role::Attendant);
        assert_eq!(
            RouteGuard::check(ADMIN_SETTINGS, Some(&attendant)),
            Access::Redirect(ATTENDANT_ORDERS)
        );

        let customer = user(Role::Customer);
        assert_eq!(
            RouteGuard::check(ATTENDANT_ORDERS, Some(&customer)),
            Access::Redirect(HOME)
        );
    }

    #[test]
    fn admin_reaches_both_areas() {
        let admin = user(Role::Admin);
        assert_eq!(RouteGuard::check(ADMIN_MENU, Some(&admin)), Access::Granted);
        assert_eq!(RouteGuard::check(ADMIN_ORDERS, Some(&admin)), Access::Granted);
        // Admin may also work the attendant order queue
        assert_eq!(RouteGuard::check(ATTENDANT_ORDERS, Some(&admin)), Access::Granted);
    }

    #[test]
    fn attendant_stays_out_of_admin() {
        let attendant = user(Role::Attendant);
        assert_eq!(RouteGuard::check(ATTENDANT_ORDERS, Some(&attendant)), Access::Granted);
        assert_eq!(
            RouteGuard::check(ADMIN_DASHBOARD, Some(&attendant)),
            Access::Redirect(ATTENDANT_ORDERS)
        );
    }
}
