//! Role-gated route resolution.
//!
//! The webview asks before every navigation; the answer is either Allow or
//! a redirect target. Redirects always land on a path that resolves to
//! Allow in at most one more hop, so the webview never loops.

use serde::Serialize;
use tauri::State;

use crate::session::CurrentUser;
use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "to", rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

enum Requirement {
    /// Reachable signed in or out.
    Public,
    /// Any signed-in account.
    Authenticated,
    CoachOnly,
    ClientOnly,
}

/// Every navigable path. Anything not listed redirects to the root.
const ROUTES: &[(&str, Requirement)] = &[
    ("/login", Requirement::Public),
    ("/register", Requirement::Public),
    ("/register/coach", Requirement::Public),
    ("/admin/dashboard", Requirement::Authenticated),
    ("/applications", Requirement::Authenticated),
    ("/appointments", Requirement::Authenticated),
    ("/coach/dashboard", Requirement::CoachOnly),
    ("/coach/profile", Requirement::CoachOnly),
    ("/coach/clients", Requirement::CoachOnly),
    ("/coach/resumes/pending", Requirement::CoachOnly),
    ("/coach/availability", Requirement::CoachOnly),
    ("/client/dashboard", Requirement::ClientOnly),
    ("/client/profile", Requirement::ClientOnly),
    ("/client/resume", Requirement::ClientOnly),
];

/// The signed-in user's home screen.
pub fn dashboard_for(user: &CurrentUser) -> &'static str {
    if user.is_super_admin() {
        "/admin/dashboard"
    } else if user.is_coach() {
        "/coach/dashboard"
    } else {
        "/client/dashboard"
    }
}

pub fn resolve(path: &str, user: Option<&CurrentUser>) -> RouteDecision {
    if path == "/" {
        return match user {
            Some(user) => RouteDecision::Redirect(dashboard_for(user)),
            None => RouteDecision::Redirect("/login"),
        };
    }

    let Some((_, requirement)) = ROUTES.iter().find(|(route, _)| *route == path) else {
        return RouteDecision::Redirect("/");
    };

    match requirement {
        Requirement::Public => RouteDecision::Allow,
        Requirement::Authenticated => match user {
            Some(_) => RouteDecision::Allow,
            None => RouteDecision::Redirect("/login"),
        },
        Requirement::CoachOnly => match user {
            Some(user) if user.is_coach() => RouteDecision::Allow,
            Some(_) => RouteDecision::Redirect("/"),
            None => RouteDecision::Redirect("/login"),
        },
        Requirement::ClientOnly => match user {
            Some(user) if user.is_client() => RouteDecision::Allow,
            Some(_) => RouteDecision::Redirect("/"),
            None => RouteDecision::Redirect("/login"),
        },
    }
}

#[tauri::command]
pub fn resolve_route(state: State<'_, AppState>, path: String) -> Result<RouteDecision, String> {
    let user = state.session.current();
    Ok(resolve(&path, user.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserRole;
    use uuid::Uuid;

    fn user(role: UserRole, super_admin: bool) -> CurrentUser {
        CurrentUser {
            user_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            user_type: role,
            super_admin,
        }
    }

    fn client() -> CurrentUser {
        user(UserRole::Client, false)
    }

    fn coach() -> CurrentUser {
        user(UserRole::Coach, false)
    }

    fn admin() -> CurrentUser {
        user(UserRole::Coach, true)
    }

    #[test]
    fn public_routes_allow_everyone() {
        for path in ["/login", "/register", "/register/coach"] {
            assert_eq!(resolve(path, None), RouteDecision::Allow);
            assert_eq!(resolve(path, Some(&client())), RouteDecision::Allow);
        }
    }

    #[test]
    fn unknown_path_redirects_to_root() {
        assert_eq!(resolve("/nope", None), RouteDecision::Redirect("/"));
        assert_eq!(
            resolve("/coach/dashboard/extra", Some(&coach())),
            RouteDecision::Redirect("/")
        );
    }

    #[test]
    fn signed_out_users_land_on_login() {
        assert_eq!(resolve("/", None), RouteDecision::Redirect("/login"));
        assert_eq!(
            resolve("/appointments", None),
            RouteDecision::Redirect("/login")
        );
        assert_eq!(
            resolve("/coach/dashboard", None),
            RouteDecision::Redirect("/login")
        );
    }

    #[test]
    fn root_redirects_to_the_role_dashboard() {
        assert_eq!(
            resolve("/", Some(&client())),
            RouteDecision::Redirect("/client/dashboard")
        );
        assert_eq!(
            resolve("/", Some(&coach())),
            RouteDecision::Redirect("/coach/dashboard")
        );
        assert_eq!(
            resolve("/", Some(&admin())),
            RouteDecision::Redirect("/admin/dashboard")
        );
    }

    #[test]
    fn shared_routes_only_need_a_session() {
        for path in ["/appointments", "/applications", "/admin/dashboard"] {
            assert_eq!(resolve(path, Some(&client())), RouteDecision::Allow);
            assert_eq!(resolve(path, Some(&coach())), RouteDecision::Allow);
        }
    }

    #[test]
    fn role_mismatch_bounces_to_root() {
        assert_eq!(
            resolve("/coach/dashboard", Some(&client())),
            RouteDecision::Redirect("/")
        );
        assert_eq!(
            resolve("/client/resume", Some(&coach())),
            RouteDecision::Redirect("/")
        );
    }

    #[test]
    fn redirects_terminate_within_two_hops() {
        // Client hitting a coach route: bounced to "/", then to their
        // dashboard, which must resolve to Allow.
        let client = client();
        let RouteDecision::Redirect(hop1) = resolve("/coach/dashboard", Some(&client)) else {
            panic!("expected a redirect");
        };
        let RouteDecision::Redirect(hop2) = resolve(hop1, Some(&client)) else {
            panic!("expected a redirect");
        };
        assert_eq!(resolve(hop2, Some(&client)), RouteDecision::Allow);
    }

    #[test]
    fn every_dashboard_target_resolves_to_allow() {
        for account in [client(), coach(), admin()] {
            assert_eq!(
                resolve(dashboard_for(&account), Some(&account)),
                RouteDecision::Allow
            );
        }
    }

    #[test]
    fn decision_serializes_with_action_tag() {
        let allow = serde_json::to_value(RouteDecision::Allow).unwrap();
        assert_eq!(allow, serde_json::json!({"action": "allow"}));

        let redirect = serde_json::to_value(RouteDecision::Redirect("/login")).unwrap();
        assert_eq!(
            redirect,
            serde_json::json!({"action": "redirect", "to": "/login"})
        );
    }
}
