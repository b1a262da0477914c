pub(super) use super::reduce;
pub(super) use super::CivicaEffect;
pub(super) use crate::actions::AppAction;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::config::Config;
pub(super) use crate::error::TransitionError;
pub(super) use crate::state::AppTab;
pub(super) use crate::state::ChatMessage;
pub(super) use crate::state::GeoPoint;
pub(super) use crate::state::Issue;
pub(super) use crate::state::IssueCategory;
pub(super) use crate::state::IssueId;
pub(super) use crate::state::IssueStatus;
pub(super) use crate::state::Session;
pub(super) use crate::state::SessionState;
pub(super) use crate::state::User;
pub(super) use crate::state::UserId;
pub(super) use crate::state::REPORT_AWARD_POINTS;
pub(super) use crate::state::RESOLVE_AWARD_POINTS;

mod invariants;
mod rewards;
mod transitions;

fn state() -> SessionState {
    SessionState::new(Config::default())
}

fn test_user(id: &str, points: u32) -> User {
    User {
        id: UserId(id.to_string()),
        name: format!("{id} name"),
        points,
        reported_issues: Vec::new(),
        resolved_issues: Vec::new(),
    }
}

fn logged_in(points: u32) -> SessionState {
    let mut state = state();
    run_user(&mut state, UserAction::Login(test_user("u-test", points)));
    state
}

fn open_issue(id: &str) -> Issue {
    Issue {
        id: IssueId(id.to_string()),
        title: format!("issue {id}"),
        description: String::new(),
        category: IssueCategory::Other,
        location: GeoPoint {
            lat: 45.52,
            lng: -122.68,
        },
        status: IssueStatus::Open,
        reported_by: None,
        reported_at_ms: 0,
    }
}

fn run_user(state: &mut SessionState, action: UserAction) -> Vec<CivicaEffect> {
    reduce(state, AppAction::User(action)).expect("transition applied")
}

fn run_runtime(state: &mut SessionState, action: RuntimeAction) {
    let effects = reduce(state, AppAction::Runtime(action)).expect("runtime applied");
    assert!(effects.is_empty());
}

fn user_points(state: &SessionState) -> u32 {
    state.current_user().expect("logged in").points
}
