use super::*;

#[test]
fn paths_round_trip_for_known_routes() {
    for route in [
        AppRoute::Login,
        AppRoute::Dashboard,
        AppRoute::Books,
        AppRoute::Users,
        AppRoute::Authors,
        AppRoute::Categories,
        AppRoute::Reviews,
        AppRoute::Orders,
    ] {
        assert_eq!(AppRoute::from_path(route.to_path()), route);
    }
}

#[test]
fn unknown_paths_map_to_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/books/extra"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
}

#[test]
fn everything_but_login_requires_auth() {
    assert!(!AppRoute::Login.requires_auth());
    assert!(AppRoute::Dashboard.requires_auth());
    assert!(AppRoute::Books.requires_auth());
    assert!(AppRoute::NotFound.requires_auth());
}

#[test]
fn unauthenticated_protected_navigation_redirects_to_login() {
    assert_eq!(resolve(AppRoute::Books, false), AppRoute::Login);
    assert_eq!(resolve(AppRoute::Dashboard, false), AppRoute::Login);
    // an anonymous visitor never even sees the 404 view
    assert_eq!(resolve(AppRoute::NotFound, false), AppRoute::Login);
}

#[test]
fn cold_load_of_a_protected_path_without_a_session_seeds_login() {
    // the router constructor seeds its route signal with exactly this
    // composition, so the first rendered view is already guarded
    assert_eq!(resolve(AppRoute::from_path("/books"), false), AppRoute::Login);
    assert_eq!(resolve(AppRoute::from_path("/"), false), AppRoute::Login);
    assert_eq!(resolve(AppRoute::from_path("/books"), true), AppRoute::Books);
}

#[test]
fn authenticated_navigation_passes_through() {
    assert_eq!(resolve(AppRoute::Books, true), AppRoute::Books);
    assert_eq!(resolve(AppRoute::NotFound, true), AppRoute::NotFound);
}

#[test]
fn authenticated_login_visit_lands_on_dashboard() {
    assert_eq!(resolve(AppRoute::Login, true), AppRoute::Dashboard);
    assert_eq!(resolve(AppRoute::Login, false), AppRoute::Login);
}

#[test]
fn chrome_shows_only_on_protected_matches() {
    assert!(AppRoute::Books.is_protected_match());
    assert!(AppRoute::Dashboard.is_protected_match());
    assert!(!AppRoute::Login.is_protected_match());
    assert!(!AppRoute::NotFound.is_protected_match());
}
