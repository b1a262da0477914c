use super::*;
use pretty_assertions::assert_eq;

#[test]
fn report_appends_in_submission_order() {
    let mut state = logged_in(0);

    for id in ["a", "b", "c"] {
        let before = state.issues.len();
        run_user(&mut state, UserAction::ReportIssue(open_issue(id)));
        assert_eq!(state.issues.len(), before + 1);
    }

    let ids: Vec<&str> = state.issues.iter().map(|i| i.id.0.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn report_awards_points_and_records_reporter_once() {
    let mut state = logged_in(100);

    run_user(&mut state, UserAction::ReportIssue(open_issue("x")));

    let user = state.current_user().expect("logged in");
    assert_eq!(user.points, 100 + REPORT_AWARD_POINTS);
    assert_eq!(user.reported_issues, vec![IssueId("x".to_string())]);
}

#[test]
fn report_routes_back_to_map() {
    let mut state = logged_in(0);
    run_user(&mut state, UserAction::SelectTab(AppTab::Report));

    run_user(&mut state, UserAction::ReportIssue(open_issue("x")));

    assert_eq!(state.routing.tab, AppTab::Map);
}

#[test]
fn duplicate_issue_id_is_rejected_without_side_effects() {
    let mut state = logged_in(100);
    run_user(&mut state, UserAction::ReportIssue(open_issue("x")));
    run_user(&mut state, UserAction::SelectTab(AppTab::Report));
    let points_before = user_points(&state);

    let err = reduce(
        &mut state,
        AppAction::User(UserAction::ReportIssue(open_issue("x"))),
    )
    .expect_err("duplicate rejected");

    assert_eq!(err, TransitionError::DuplicateIssueId(IssueId("x".to_string())));
    assert_eq!(state.issues.len(), 1);
    assert_eq!(user_points(&state), points_before);
    // A rejected report must not hijack the tab either.
    assert_eq!(state.routing.tab, AppTab::Report);
}

#[test]
fn logged_out_report_appends_without_award() {
    let mut state = state();

    run_user(&mut state, UserAction::ReportIssue(open_issue("x")));

    assert_eq!(state.issues.len(), 1);
    assert_eq!(state.session, Session::LoggedOut);
}

#[test]
fn resolve_marks_issue_and_awards_resolver() {
    let mut state = logged_in(0);
    run_runtime(&mut state, RuntimeAction::SeedIssues(vec![open_issue("x")]));

    run_user(&mut state, UserAction::ResolveIssue(IssueId("x".to_string())));

    assert_eq!(
        state.issue(&IssueId("x".to_string())).expect("issue").status,
        IssueStatus::Resolved
    );
    let user = state.current_user().expect("logged in");
    assert_eq!(user.points, RESOLVE_AWARD_POINTS);
    assert_eq!(user.resolved_issues, vec![IssueId("x".to_string())]);
}

#[test]
fn resolver_need_not_be_the_reporter() {
    let mut state = logged_in(0);
    let mut reported = open_issue("x");
    reported.reported_by = Some(UserId("u-someone-else".to_string()));
    run_runtime(&mut state, RuntimeAction::SeedIssues(vec![reported]));

    run_user(&mut state, UserAction::ResolveIssue(IssueId("x".to_string())));

    assert_eq!(user_points(&state), RESOLVE_AWARD_POINTS);
}

#[test]
fn resolving_unknown_id_is_rejected() {
    let mut state = logged_in(0);

    let err = reduce(
        &mut state,
        AppAction::User(UserAction::ResolveIssue(IssueId("ghost".to_string()))),
    )
    .expect_err("missing issue");

    assert_eq!(err, TransitionError::IssueNotFound(IssueId("ghost".to_string())));
    assert_eq!(user_points(&state), 0);
}

#[test]
fn second_resolve_is_rejected_and_never_reawards() {
    let mut state = logged_in(0);
    run_runtime(&mut state, RuntimeAction::SeedIssues(vec![open_issue("x")]));
    run_user(&mut state, UserAction::ResolveIssue(IssueId("x".to_string())));

    let err = reduce(
        &mut state,
        AppAction::User(UserAction::ResolveIssue(IssueId("x".to_string()))),
    )
    .expect_err("second resolve rejected");

    assert_eq!(err, TransitionError::AlreadyResolved(IssueId("x".to_string())));
    let user = state.current_user().expect("logged in");
    assert_eq!(user.points, RESOLVE_AWARD_POINTS);
    assert_eq!(user.resolved_issues.len(), 1);
}

#[test]
fn report_resolve_purchase_scenario() {
    // points=100, issues=[]; report -> 150; resolve -> 250;
    // purchase 300 -> rejected, balance stays 250.
    let mut state = logged_in(100);

    run_user(&mut state, UserAction::ReportIssue(open_issue("x")));
    assert_eq!(user_points(&state), 150);
    assert_eq!(state.routing.tab, AppTab::Map);

    run_user(&mut state, UserAction::ResolveIssue(IssueId("x".to_string())));
    assert_eq!(user_points(&state), 250);

    let err = reduce(
        &mut state,
        AppAction::User(UserAction::PurchaseReward { cost: 300 }),
    )
    .expect_err("overdraft rejected");
    assert_eq!(
        err,
        TransitionError::InsufficientPoints {
            cost: 300,
            points: 250
        }
    );
    assert_eq!(user_points(&state), 250);
}
