use mindful_portal::{
    Role, RouteConfigError, Session,
    guard::{Access, Guard, GuardDecision, PublicGuard, RoleGuard},
};
use uuid::Uuid;

fn user() -> Session {
    Session::AuthenticatedUser { id: Uuid::new_v4() }
}

fn therapist() -> Session {
    Session::AuthenticatedTherapist { id: Uuid::new_v4() }
}

// --- RoleGuard ---

#[test]
fn test_role_guard_allows_matching_role() {
    let guard = RoleGuard::new([Role::User], "/signin").unwrap();
    assert_eq!(guard.evaluate(&user()), GuardDecision::Allow);
}

#[test]
fn test_role_guard_redirects_other_role() {
    let guard = RoleGuard::new([Role::User], "/signin").unwrap();
    assert_eq!(
        guard.evaluate(&therapist()),
        GuardDecision::Redirect("/signin".to_string())
    );
}

#[test]
fn test_role_guard_redirects_anonymous() {
    let user_guard = RoleGuard::new([Role::User], "/signin").unwrap();
    let therapist_guard = RoleGuard::new([Role::Therapist], "/therapist-signin").unwrap();

    assert_eq!(
        user_guard.evaluate(&Session::Unauthenticated),
        GuardDecision::Redirect("/signin".to_string())
    );
    assert_eq!(
        therapist_guard.evaluate(&Session::Unauthenticated),
        GuardDecision::Redirect("/therapist-signin".to_string())
    );
}

#[test]
fn test_role_guard_with_both_roles() {
    let guard = RoleGuard::new([Role::User, Role::Therapist], "/").unwrap();
    assert!(guard.evaluate(&user()).is_allowed());
    assert!(guard.evaluate(&therapist()).is_allowed());
    assert!(!guard.evaluate(&Session::Unauthenticated).is_allowed());
}

#[test]
fn test_role_guard_deduplicates_roles() {
    let guard = RoleGuard::new([Role::User, Role::User], "/signin").unwrap();
    assert_eq!(guard.allowed_roles().len(), 1);
    assert_eq!(guard.redirect_path(), "/signin");
}

#[test]
fn test_role_guard_rejects_empty_role_set() {
    let result = RoleGuard::new([], "/signin");
    assert_eq!(result.unwrap_err(), RouteConfigError::EmptyAllowedRoles);
}

#[test]
fn test_role_guard_rejects_relative_redirect() {
    for redirect in ["", "signin"] {
        let result = RoleGuard::new([Role::User], redirect);
        assert_eq!(
            result.unwrap_err(),
            RouteConfigError::InvalidRedirectPath(redirect.to_string())
        );
    }
}

#[test]
fn test_guard_decision_reacts_to_sign_out() {
    let guard = RoleGuard::new([Role::User], "/signin").unwrap();
    let mut session = user();
    assert!(guard.evaluate(&session).is_allowed());

    session = Session::Unauthenticated;
    assert_eq!(
        guard.evaluate(&session),
        GuardDecision::Redirect("/signin".to_string())
    );
}

// --- PublicGuard ---

#[test]
fn test_public_guard_allows_anonymous() {
    let guard = PublicGuard::new("/home", "/therapist/patients").unwrap();
    assert_eq!(guard.evaluate(&Session::Unauthenticated), GuardDecision::Allow);
}

#[test]
fn test_public_guard_sends_principals_to_their_landing_page() {
    let guard = PublicGuard::new("/home", "/therapist/patients").unwrap();
    assert_eq!(
        guard.evaluate(&user()),
        GuardDecision::Redirect("/home".to_string())
    );
    assert_eq!(
        guard.evaluate(&therapist()),
        GuardDecision::Redirect("/therapist/patients".to_string())
    );
}

#[test]
fn test_public_guard_rejects_relative_redirect() {
    assert!(matches!(
        PublicGuard::new("/home", "patients"),
        Err(RouteConfigError::InvalidRedirectPath(_))
    ));
}

// --- Access ---

#[test]
fn test_access_delegates_and_lists_redirect_targets() {
    let public = Access::Public(PublicGuard::new("/home", "/therapist/patients").unwrap());
    let protected = Access::Protected(RoleGuard::new([Role::Therapist], "/therapist-signin").unwrap());

    assert!(public.evaluate(&Session::Unauthenticated).is_allowed());
    assert!(protected.evaluate(&therapist()).is_allowed());
    assert_eq!(
        public.redirect_targets(),
        vec!["/home", "/therapist/patients"]
    );
    assert_eq!(protected.redirect_targets(), vec!["/therapist-signin"]);
}
