use std::collections::VecDeque;

use serde::Deserialize;
use serde::Serialize;

use crate::config::Config;

/// Points awarded for submitting a new issue report.
pub const REPORT_AWARD_POINTS: u32 = 50;
/// Points awarded for resolving an open issue.
pub const RESOLVE_AWARD_POINTS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueId(pub String);

impl std::fmt::Display for IssueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    Resolved,
}

impl IssueStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Pothole,
    Streetlight,
    Garbage,
    Graffiti,
    WaterLeak,
    Other,
}

impl IssueCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pothole => "Pothole",
            Self::Streetlight => "Streetlight",
            Self::Garbage => "Garbage",
            Self::Graffiti => "Graffiti",
            Self::WaterLeak => "Water leak",
            Self::Other => "Other",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Pothole => Self::Streetlight,
            Self::Streetlight => Self::Garbage,
            Self::Garbage => Self::Graffiti,
            Self::Graffiti => Self::WaterLeak,
            Self::WaterLeak => Self::Other,
            Self::Other => Self::Pothole,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Pothole => Self::Other,
            Self::Streetlight => Self::Pothole,
            Self::Garbage => Self::Streetlight,
            Self::Graffiti => Self::Garbage,
            Self::WaterLeak => Self::Graffiti,
            Self::Other => Self::WaterLeak,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub location: GeoPoint,
    pub status: IssueStatus,
    pub reported_by: Option<UserId>,
    pub reported_at_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub points: u32,
    pub reported_issues: Vec<IssueId>,
    pub resolved_issues: Vec<IssueId>,
}

/// Login state. Replaces a nullable user so the logged-out case is a
/// variant the compiler makes the shell handle, not a missed null check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    LoggedOut,
    LoggedIn(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(user) => Some(user),
        }
    }

    pub fn user_mut(&mut self) -> Option<&mut User> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(user) => Some(user),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Map,
    Report,
    Chat,
    AiHelp,
    Rewards,
    Profile,
}

pub const TAB_ORDER: [AppTab; 6] = [
    AppTab::Map,
    AppTab::Report,
    AppTab::Chat,
    AppTab::AiHelp,
    AppTab::Rewards,
    AppTab::Profile,
];

impl AppTab {
    pub fn next(self) -> Self {
        match self {
            Self::Map => Self::Report,
            Self::Report => Self::Chat,
            Self::Chat => Self::AiHelp,
            Self::AiHelp => Self::Rewards,
            Self::Rewards => Self::Profile,
            Self::Profile => Self::Map,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Map => Self::Profile,
            Self::Report => Self::Map,
            Self::Chat => Self::Report,
            Self::AiHelp => Self::Chat,
            Self::Rewards => Self::AiHelp,
            Self::Profile => Self::Rewards,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Map => "Map",
            Self::Report => "Report",
            Self::Chat => "Chat",
            Self::AiHelp => "AI Help",
            Self::Rewards => "Rewards",
            Self::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: String,
    pub body: String,
    pub sent_at_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub id: String,
    pub label: String,
    pub cost: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistRole {
    Resident,
    Helper,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistLine {
    pub role: AssistRole,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct AssistPanel {
    pub transcript: Vec<AssistLine>,
    pub awaiting_reply: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub seq: u64,
    pub ts_ms: Option<i64>,
    pub message: String,
}

/// Capped session activity feed. Oldest entries drop first.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    cap: usize,
    next_seq: u64,
    buf: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            next_seq: 1,
            buf: VecDeque::with_capacity(cap),
        }
    }

    pub fn append(&mut self, mut entry: ActivityEntry) {
        entry.seq = self.next_seq;
        self.next_seq += 1;

        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.next_seq = 1;
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ActivityEntry> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Title,
    Description,
    Category,
}

impl ReportField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Category,
            Self::Description => Self::Title,
            Self::Category => Self::Description,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Category => "Category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: IssueCategory,
    pub field: ReportField,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: IssueCategory::Pothole,
            field: ReportField::Title,
        }
    }
}

impl ReportDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub report_draft: ReportDraft,
    pub chat_input: String,
    pub assist_input: String,
}

#[derive(Debug, Clone)]
pub struct Routing {
    pub tab: AppTab,
}

/// The single owner of all session state. Every mutation funnels through
/// `reducer::reduce`; views only ever see this by shared reference.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub session: Session,
    pub routing: Routing,
    pub issues: Vec<Issue>,
    pub chat: Vec<ChatMessage>,
    pub assist: AssistPanel,
    pub rewards: Vec<RewardItem>,
    pub interaction: Interaction,
    pub activity: ActivityLog,
    pub next_issue_seq: u64,
    pub config: Config,
}

impl SessionState {
    pub fn new(config: Config) -> Self {
        let tab = config
            .shell
            .start_tab
            .as_deref()
            .and_then(parse_tab)
            .unwrap_or(AppTab::Map);
        Self {
            session: Session::LoggedOut,
            routing: Routing { tab },
            issues: Vec::new(),
            chat: Vec::new(),
            assist: AssistPanel::default(),
            rewards: Vec::new(),
            interaction: Interaction::default(),
            activity: ActivityLog::new(500),
            next_issue_seq: 1,
            config,
        }
    }

    pub fn issue(&self, id: &IssueId) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == *id)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn points(&self) -> u32 {
        self.session.user().map(|user| user.points).unwrap_or(0)
    }

    pub fn open_issue_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.status == IssueStatus::Open)
            .count()
    }
}

pub fn parse_tab(input: &str) -> Option<AppTab> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "map" => Some(AppTab::Map),
        "2" | "report" => Some(AppTab::Report),
        "3" | "chat" => Some(AppTab::Chat),
        "4" | "ai-help" | "aihelp" | "help" => Some(AppTab::AiHelp),
        "5" | "rewards" => Some(AppTab::Rewards),
        "6" | "profile" => Some(AppTab::Profile),
        _ => None,
    }
}
