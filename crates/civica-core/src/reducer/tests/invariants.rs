use super::*;
use pretty_assertions::assert_eq;

fn assert_issue_ids_unique(state: &SessionState) {
    for (idx, issue) in state.issues.iter().enumerate() {
        assert!(
            state.issues[idx + 1..]
                .iter()
                .all(|other| other.id != issue.id),
            "duplicate issue id {}",
            issue.id
        );
    }
}

#[test]
fn issue_ids_stay_unique_across_mixed_reports() {
    let mut state = logged_in(0);
    run_runtime(
        &mut state,
        RuntimeAction::SeedIssues(vec![open_issue("a"), open_issue("b")]),
    );

    run_user(&mut state, UserAction::ReportIssue(open_issue("c")));
    let _ = reduce(
        &mut state,
        AppAction::User(UserAction::ReportIssue(open_issue("a"))),
    );
    run_user(&mut state, UserAction::ReportIssue(open_issue("d")));

    assert_issue_ids_unique(&state);
    assert_eq!(state.issues.len(), 4);
}

#[test]
fn status_only_moves_from_open_to_resolved() {
    let mut state = logged_in(0);
    run_runtime(&mut state, RuntimeAction::SeedIssues(vec![open_issue("x")]));

    run_user(&mut state, UserAction::ResolveIssue(IssueId("x".to_string())));
    let _ = reduce(
        &mut state,
        AppAction::User(UserAction::ResolveIssue(IssueId("x".to_string()))),
    );

    assert_eq!(
        state.issue(&IssueId("x".to_string())).expect("issue").status,
        IssueStatus::Resolved
    );
}

#[test]
fn rejected_transitions_leave_state_byte_identical() {
    let mut state = logged_in(120);
    run_runtime(&mut state, RuntimeAction::SeedIssues(vec![open_issue("x")]));
    run_user(&mut state, UserAction::ResolveIssue(IssueId("x".to_string())));

    let rejected: Vec<AppAction> = vec![
        AppAction::User(UserAction::ReportIssue(open_issue("x"))),
        AppAction::User(UserAction::ResolveIssue(IssueId("x".to_string()))),
        AppAction::User(UserAction::ResolveIssue(IssueId("nope".to_string()))),
        AppAction::User(UserAction::PurchaseReward { cost: 10_000 }),
    ];

    for action in rejected {
        let issues_before = state.issues.clone();
        let session_before = state.session.clone();
        let tab_before = state.routing.tab;
        let activity_before = state.activity.len();

        reduce(&mut state, action).expect_err("rejected");

        assert_eq!(state.issues, issues_before);
        assert_eq!(state.session, session_before);
        assert_eq!(state.routing.tab, tab_before);
        assert_eq!(state.activity.len(), activity_before);
    }
}

#[test]
fn points_never_go_negative_under_any_purchase_sequence() {
    let mut state = logged_in(100);

    for cost in [40, 40, 40, 40] {
        let _ = reduce(
            &mut state,
            AppAction::User(UserAction::PurchaseReward { cost }),
        );
        assert!(user_points(&state) <= 100);
    }

    // 100 - 40 - 40 applied, the rest rejected.
    assert_eq!(user_points(&state), 20);
}

#[test]
fn awards_accumulate_exactly_per_applied_transition() {
    let mut state = logged_in(0);

    for id in ["a", "b", "c"] {
        run_user(&mut state, UserAction::ReportIssue(open_issue(id)));
    }
    for id in ["a", "b"] {
        run_user(&mut state, UserAction::ResolveIssue(IssueId(id.to_string())));
    }

    let user = state.current_user().expect("logged in");
    assert_eq!(
        user.points,
        3 * REPORT_AWARD_POINTS + 2 * RESOLVE_AWARD_POINTS
    );
    assert_eq!(user.reported_issues.len(), 3);
    assert_eq!(user.resolved_issues.len(), 2);
}

#[test]
fn activity_log_caps_at_capacity() {
    use crate::state::ActivityEntry;
    use crate::state::ActivityLog;

    let mut log = ActivityLog::new(3);
    for i in 0..5 {
        log.append(ActivityEntry {
            seq: 0,
            ts_ms: None,
            message: format!("entry {i}"),
        });
    }

    assert_eq!(log.len(), 3);
    let seqs: Vec<u64> = log.iter().map(|entry| entry.seq).collect();
    assert_eq!(seqs, vec![3, 4, 5]);
}
