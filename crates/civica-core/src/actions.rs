use crate::state::AppTab;
use crate::state::ChatMessage;
use crate::state::Issue;
use crate::state::IssueId;
use crate::state::RewardItem;
use crate::state::User;

#[derive(Debug, Clone)]
pub enum AppAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

/// Everything a resident can do from the shell. Each variant corresponds to
/// one callback the feature panels hand back to the session controller.
#[derive(Debug, Clone)]
pub enum UserAction {
    Login(User),
    Logout,

    SelectTab(AppTab),
    NextTab,
    PrevTab,

    ReportIssue(Issue),
    ResolveIssue(IssueId),
    PurchaseReward { cost: u32 },

    ReportDraftInput(char),
    ReportDraftBackspace,
    ReportDraftNextField,
    ReportDraftPrevField,
    ReportDraftNextCategory,
    ReportDraftPrevCategory,
    ReportDraftSubmit,

    ChatInput(char),
    ChatBackspace,
    ChatSubmit,

    AssistInput(char),
    AssistBackspace,
    AssistSubmit,

    Quit,
}

/// Host-driven updates: seeding at startup and deliveries from the external
/// chat and assistant collaborators. These never fail.
#[derive(Debug, Clone)]
pub enum RuntimeAction {
    SeedIssues(Vec<Issue>),
    SeedRewards(Vec<RewardItem>),
    ChatMessageReceived(ChatMessage),
    AssistReplied(String),
}
