use crate::actions::AppAction;
use crate::actions::RuntimeAction;
use crate::actions::UserAction;
use crate::error::TransitionError;
use crate::error::TransitionResult;
use crate::state::ActivityEntry;
use crate::state::AppTab;
use crate::state::AssistLine;
use crate::state::AssistRole;
use crate::state::ChatMessage;
use crate::state::GeoPoint;
use crate::state::Issue;
use crate::state::IssueId;
use crate::state::IssueStatus;
use crate::state::ReportField;
use crate::state::Session;
use crate::state::SessionState;
use crate::state::REPORT_AWARD_POINTS;
use crate::state::RESOLVE_AWARD_POINTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Quit,
}

/// Work the shell asks its host to do. Chat transport and assistant
/// inference live outside the session controller; the reducer only emits
/// the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CivicaEffect {
    RequestFrame,
    SubmitChat { message: String },
    AskAssistant { prompt: String },
    EmitHostEvent(HostEvent),
}

/// Applies one action to the session. On `Err` the state is exactly as it
/// was before the call; effects are only returned for applied transitions.
pub fn reduce(state: &mut SessionState, action: AppAction) -> TransitionResult<Vec<CivicaEffect>> {
    match action {
        AppAction::User(user) => reduce_user(state, user),
        AppAction::Runtime(runtime) => {
            reduce_runtime(state, runtime);
            Ok(Vec::new())
        }
    }
}

fn reduce_user(state: &mut SessionState, action: UserAction) -> TransitionResult<Vec<CivicaEffect>> {
    match action {
        UserAction::Login(user) => {
            record_activity(state, format!("{} signed in", user.name));
            state.session = Session::LoggedIn(user);
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::Logout => {
            if let Some(user) = state.session.user() {
                record_activity(state, format!("{} signed out", user.name));
            }
            state.session = Session::LoggedOut;
            state.routing.tab = AppTab::Map;
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::SelectTab(tab) => {
            state.routing.tab = tab;
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::NextTab => {
            state.routing.tab = state.routing.tab.next();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::PrevTab => {
            state.routing.tab = state.routing.tab.prev();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ReportIssue(issue) => {
            report_issue(state, issue)?;
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ResolveIssue(issue_id) => {
            resolve_issue(state, issue_id)?;
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::PurchaseReward { cost } => {
            // Unreachable while logged out (the login gate owns the screen),
            // so a silent no-op mirrors the view contract.
            let Some(user) = state.session.user_mut() else {
                return Ok(vec![CivicaEffect::RequestFrame]);
            };
            let points = user.points;
            user.points = points
                .checked_sub(cost)
                .ok_or(TransitionError::InsufficientPoints { cost, points })?;
            record_activity(state, format!("redeemed a reward for {cost} points"));
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ReportDraftInput(ch) => {
            let draft = &mut state.interaction.report_draft;
            match draft.field {
                ReportField::Title => draft.title.push(ch),
                ReportField::Description => draft.description.push(ch),
                ReportField::Category => {}
            }
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ReportDraftBackspace => {
            let draft = &mut state.interaction.report_draft;
            match draft.field {
                ReportField::Title => {
                    draft.title.pop();
                }
                ReportField::Description => {
                    draft.description.pop();
                }
                ReportField::Category => {}
            }
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ReportDraftNextField => {
            let draft = &mut state.interaction.report_draft;
            draft.field = draft.field.next();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ReportDraftPrevField => {
            let draft = &mut state.interaction.report_draft;
            draft.field = draft.field.prev();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ReportDraftNextCategory => {
            let draft = &mut state.interaction.report_draft;
            draft.category = draft.category.next();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ReportDraftPrevCategory => {
            let draft = &mut state.interaction.report_draft;
            draft.category = draft.category.prev();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ReportDraftSubmit => {
            if state.interaction.report_draft.title.trim().is_empty() {
                return Ok(vec![CivicaEffect::RequestFrame]);
            }
            let issue = build_draft_issue(state);
            report_issue(state, issue)?;
            state.interaction.report_draft.clear();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ChatInput(ch) => {
            state.interaction.chat_input.push(ch);
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ChatBackspace => {
            state.interaction.chat_input.pop();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::ChatSubmit => {
            let input = std::mem::take(&mut state.interaction.chat_input);
            let body = input.trim().to_string();
            if body.is_empty() {
                return Ok(vec![CivicaEffect::RequestFrame]);
            }
            let author = state
                .current_user()
                .map(|user| user.name.clone())
                .unwrap_or_else(|| "guest".to_string());
            state.chat.push(ChatMessage {
                author,
                body: body.clone(),
                sent_at_ms: now_ms(),
            });
            Ok(vec![
                CivicaEffect::RequestFrame,
                CivicaEffect::SubmitChat { message: body },
            ])
        }
        UserAction::AssistInput(ch) => {
            state.interaction.assist_input.push(ch);
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::AssistBackspace => {
            state.interaction.assist_input.pop();
            Ok(vec![CivicaEffect::RequestFrame])
        }
        UserAction::AssistSubmit => {
            let input = std::mem::take(&mut state.interaction.assist_input);
            let prompt = input.trim().to_string();
            if prompt.is_empty() {
                return Ok(vec![CivicaEffect::RequestFrame]);
            }
            state.assist.transcript.push(AssistLine {
                role: AssistRole::Resident,
                text: prompt.clone(),
            });
            state.assist.awaiting_reply = true;
            Ok(vec![
                CivicaEffect::RequestFrame,
                CivicaEffect::AskAssistant { prompt },
            ])
        }
        UserAction::Quit => Ok(vec![CivicaEffect::EmitHostEvent(HostEvent::Quit)]),
    }
}

fn reduce_runtime(state: &mut SessionState, action: RuntimeAction) {
    match action {
        RuntimeAction::SeedIssues(issues) => {
            for issue in issues {
                if state.issue(&issue.id).is_none() {
                    state.issues.push(issue);
                }
            }
        }
        RuntimeAction::SeedRewards(rewards) => {
            state.rewards = rewards;
        }
        RuntimeAction::ChatMessageReceived(message) => {
            state.chat.push(message);
        }
        RuntimeAction::AssistReplied(text) => {
            state.assist.awaiting_reply = false;
            state.assist.transcript.push(AssistLine {
                role: AssistRole::Helper,
                text,
            });
        }
    }
}

/// Append a new issue, award reporter points, and route back to the map.
/// Duplicate ids are rejected before any state changes.
fn report_issue(state: &mut SessionState, issue: Issue) -> TransitionResult<()> {
    if state.issue(&issue.id).is_some() {
        return Err(TransitionError::DuplicateIssueId(issue.id));
    }

    let issue_id = issue.id.clone();
    let title = issue.title.clone();
    state.issues.push(issue);

    if let Some(user) = state.session.user_mut() {
        user.points = user.points.saturating_add(REPORT_AWARD_POINTS);
        user.reported_issues.push(issue_id.clone());
    }

    record_activity(
        state,
        format!("reported '{title}' ({issue_id}, +{REPORT_AWARD_POINTS} pts)"),
    );
    state.routing.tab = AppTab::Map;
    Ok(())
}

/// Mark an open issue resolved and award resolver points. Resolving twice is
/// rejected, never re-awarded.
fn resolve_issue(state: &mut SessionState, issue_id: IssueId) -> TransitionResult<()> {
    let issue = state
        .issues
        .iter_mut()
        .find(|issue| issue.id == issue_id)
        .ok_or_else(|| TransitionError::IssueNotFound(issue_id.clone()))?;

    match issue.status {
        IssueStatus::Resolved => return Err(TransitionError::AlreadyResolved(issue_id)),
        IssueStatus::Open => issue.status = IssueStatus::Resolved,
    }
    let title = issue.title.clone();

    if let Some(user) = state.session.user_mut() {
        user.points = user.points.saturating_add(RESOLVE_AWARD_POINTS);
        user.resolved_issues.push(issue_id.clone());
    }

    record_activity(
        state,
        format!("resolved '{title}' ({issue_id}, +{RESOLVE_AWARD_POINTS} pts)"),
    );
    Ok(())
}

fn build_draft_issue(state: &mut SessionState) -> Issue {
    let id = next_issue_id(state);
    let draft = &state.interaction.report_draft;
    Issue {
        id,
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        category: draft.category,
        // The report panel has no location picker; new reports land at the
        // city-hall marker until a map pin is supplied.
        location: GeoPoint {
            lat: 45.5152,
            lng: -122.6784,
        },
        status: IssueStatus::Open,
        reported_by: state.current_user().map(|user| user.id.clone()),
        reported_at_ms: now_ms(),
    }
}

fn next_issue_id(state: &mut SessionState) -> IssueId {
    loop {
        let candidate = IssueId(format!("issue-{:04}", state.next_issue_seq));
        state.next_issue_seq += 1;
        if state.issue(&candidate).is_none() {
            return candidate;
        }
    }
}

fn record_activity(state: &mut SessionState, message: String) {
    state.activity.append(ActivityEntry {
        seq: 0,
        ts_ms: Some(now_ms()),
        message,
    });
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests;
