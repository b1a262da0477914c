use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::{Frame, Terminal};

use civica_core::actions::{AppAction, RuntimeAction, UserAction};
use civica_core::persistence::{
    replay_latest_session, PersistedSessionEvent, PersistedSessionSnapshot, SessionEventStore,
};
use civica_core::reducer::{reduce, CivicaEffect, HostEvent};
use civica_core::state::{
    AppTab, AssistRole, ChatMessage, IssueStatus, ReportField, SessionState, User, TAB_ORDER,
};

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

pub fn run(
    state: SessionState,
    store: SessionEventStore,
    roster: Vec<User>,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let _guard = TuiGuard; // Restores the terminal on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut shell = Shell {
        state,
        store,
        roster,
        login_list: ListState::default(),
        map_list: ListState::default(),
        rewards_list: ListState::default(),
        status: None,
        should_quit: false,
    };
    shell.login_list.select(Some(0));

    run_app(&mut terminal, &mut shell)
}

struct Shell {
    state: SessionState,
    store: SessionEventStore,
    roster: Vec<User>,
    login_list: ListState,
    map_list: ListState,
    rewards_list: ListState,
    status: Option<String>,
    should_quit: bool,
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shell: &mut Shell,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| draw(frame, shell))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(shell, key);
                }
            }
        }

        if shell.should_quit {
            return Ok(());
        }
    }
}

/// Runs one user action through the reducer, journals the applied
/// transition, and plays out the returned effects. Rejections land on the
/// status line instead of mutating anything.
fn dispatch(shell: &mut Shell, action: UserAction) -> bool {
    let issues_before = shell.state.issues.len();
    let pending = journal_intent(&shell.state, &action);

    match reduce(&mut shell.state, AppAction::User(action)) {
        Ok(effects) => {
            journal_applied(shell, pending, issues_before);
            handle_effects(shell, effects);
            true
        }
        Err(err) => {
            shell.status = Some(err.to_string());
            false
        }
    }
}

fn handle_effects(shell: &mut Shell, effects: Vec<CivicaEffect>) {
    for effect in effects {
        match effect {
            CivicaEffect::RequestFrame => {}
            CivicaEffect::SubmitChat { message } => {
                // No community backend is wired up yet; the city desk bot
                // stands in for it.
                let reply = simulated_chat_reply(&message);
                let _ = reduce(
                    &mut shell.state,
                    AppAction::Runtime(RuntimeAction::ChatMessageReceived(reply)),
                );
            }
            CivicaEffect::AskAssistant { prompt } => {
                let reply = simulated_assist_reply(&prompt);
                let _ = reduce(
                    &mut shell.state,
                    AppAction::Runtime(RuntimeAction::AssistReplied(reply)),
                );
            }
            CivicaEffect::EmitHostEvent(HostEvent::Quit) => {
                let ended = shell.state.current_user().map(|user| {
                    PersistedSessionEvent::SessionEnded {
                        user_id: user.id.0.clone(),
                    }
                });
                if let Some(event) = ended {
                    journal(shell, event);
                }
                shell.should_quit = true;
            }
        }
    }
}

/// What to journal if the action applies, captured before the reducer runs.
enum JournalIntent {
    None,
    Login(PersistedSessionEvent),
    Report,
    Resolve { issue_id: String },
    Purchase { cost: u32 },
    End,
}

fn journal_intent(state: &SessionState, action: &UserAction) -> JournalIntent {
    match action {
        UserAction::Login(user) => JournalIntent::Login(PersistedSessionEvent::SessionStarted {
            user_id: user.id.0.clone(),
            user_name: user.name.clone(),
            starting_points: user.points,
        }),
        UserAction::ReportIssue(_) | UserAction::ReportDraftSubmit => JournalIntent::Report,
        UserAction::ResolveIssue(issue_id) => JournalIntent::Resolve {
            issue_id: issue_id.0.clone(),
        },
        UserAction::PurchaseReward { cost } => {
            if state.session.is_logged_in() {
                JournalIntent::Purchase { cost: *cost }
            } else {
                JournalIntent::None
            }
        }
        UserAction::Logout => JournalIntent::End,
        _ => JournalIntent::None,
    }
}

fn journal_applied(shell: &mut Shell, intent: JournalIntent, issues_before: usize) {
    let event = match intent {
        JournalIntent::None => return,
        JournalIntent::Login(event) => event,
        JournalIntent::Report => {
            // An empty draft submit applies without appending anything.
            if shell.state.issues.len() == issues_before {
                return;
            }
            let issue = shell.state.issues.last().expect("issue just appended");
            PersistedSessionEvent::IssueReported {
                issue_id: issue.id.0.clone(),
                title: issue.title.clone(),
                category: issue.category.label().to_string(),
                reporter: issue.reported_by.as_ref().map(|id| id.0.clone()),
                points_awarded: if issue.reported_by.is_some() {
                    civica_core::state::REPORT_AWARD_POINTS
                } else {
                    0
                },
            }
        }
        JournalIntent::Resolve { issue_id } => PersistedSessionEvent::IssueResolved {
            issue_id,
            resolver: shell.state.current_user().map(|user| user.id.0.clone()),
            points_awarded: if shell.state.session.is_logged_in() {
                civica_core::state::RESOLVE_AWARD_POINTS
            } else {
                0
            },
        },
        JournalIntent::Purchase { cost } => {
            let Some(user) = shell.state.current_user() else {
                return;
            };
            PersistedSessionEvent::RewardPurchased {
                user_id: user.id.0.clone(),
                cost,
                balance_after: user.points,
            }
        }
        JournalIntent::End => {
            // Logout already cleared the session; journal against the
            // replayed user so the record still names someone.
            let Ok(records) = shell.store.load() else {
                return;
            };
            let Some(session) = replay_latest_session(&records) else {
                return;
            };
            PersistedSessionEvent::SessionEnded {
                user_id: session.user_id,
            }
        }
    };
    journal(shell, event);
}

fn journal(shell: &mut Shell, event: PersistedSessionEvent) {
    let result = shell.store.append(event).and_then(|seq| {
        let session = replay_latest_session(&shell.store.load()?);
        shell.store.save_snapshot(&PersistedSessionSnapshot {
            version: 1,
            seq,
            session,
        })
    });
    if let Err(err) = result {
        shell.status = Some(format!("journal write failed: {err}"));
    }
}

fn simulated_chat_reply(message: &str) -> ChatMessage {
    let body = if message.to_ascii_lowercase().contains("when") {
        "City Desk: crews triage new reports within two business days.".to_string()
    } else {
        "City Desk: thanks, your message was shared with the neighborhood.".to_string()
    };
    ChatMessage {
        author: "City Desk".to_string(),
        body,
        sent_at_ms: now_ms(),
    }
}

fn simulated_assist_reply(prompt: &str) -> String {
    let lower = prompt.to_ascii_lowercase();
    if lower.contains("pothole") {
        "Potholes go fastest when you include the nearest cross street in the description."
            .to_string()
    } else if lower.contains("point") || lower.contains("reward") {
        "You earn 50 points per report and 100 per resolved issue; spend them on the Rewards tab."
            .to_string()
    } else if lower.contains("resolve") {
        "Open the Map tab, pick the issue, and press 'r' once the problem is actually fixed."
            .to_string()
    } else {
        "Try the Report tab to file an issue, or ask about points, potholes, or resolving."
            .to_string()
    }
}

fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

fn handle_key(shell: &mut Shell, key: KeyEvent) {
    shell.status = None;

    if !shell.state.session.is_logged_in() {
        handle_login_key(shell, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => {
                dispatch(shell, UserAction::Quit);
            }
            KeyCode::Char('l') => {
                dispatch(shell, UserAction::Logout);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            dispatch(shell, UserAction::NextTab);
            return;
        }
        KeyCode::BackTab => {
            dispatch(shell, UserAction::PrevTab);
            return;
        }
        _ => {}
    }

    match shell.state.routing.tab {
        AppTab::Map => handle_map_key(shell, key),
        AppTab::Report => handle_report_key(shell, key),
        AppTab::Chat => handle_chat_key(shell, key),
        AppTab::AiHelp => handle_assist_key(shell, key),
        AppTab::Rewards => handle_rewards_key(shell, key),
        AppTab::Profile => handle_profile_key(shell, key),
    }
}

fn handle_login_key(shell: &mut Shell, key: KeyEvent) {
    match key.code {
        KeyCode::Up => move_selection(&mut shell.login_list, shell.roster.len(), -1),
        KeyCode::Down => move_selection(&mut shell.login_list, shell.roster.len(), 1),
        KeyCode::Enter => {
            let Some(idx) = shell.login_list.selected() else {
                return;
            };
            if let Some(user) = shell.roster.get(idx).cloned() {
                dispatch(shell, UserAction::Login(user));
            }
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            shell.should_quit = true;
        }
        _ => {}
    }
}

fn handle_map_key(shell: &mut Shell, key: KeyEvent) {
    match key.code {
        KeyCode::Up => move_selection(&mut shell.map_list, shell.state.issues.len(), -1),
        KeyCode::Down => move_selection(&mut shell.map_list, shell.state.issues.len(), 1),
        KeyCode::Char('r') | KeyCode::Enter => {
            let Some(idx) = shell.map_list.selected() else {
                return;
            };
            let Some(issue) = shell.state.issues.get(idx) else {
                return;
            };
            let issue_id = issue.id.clone();
            if dispatch(shell, UserAction::ResolveIssue(issue_id)) {
                shell.status = Some("issue marked resolved (+100 pts)".to_string());
            }
        }
        _ => handle_nav_key(shell, key),
    }
}

fn handle_report_key(shell: &mut Shell, key: KeyEvent) {
    let field = shell.state.interaction.report_draft.field;
    match key.code {
        KeyCode::Char(ch) => {
            dispatch(shell, UserAction::ReportDraftInput(ch));
        }
        KeyCode::Backspace => {
            dispatch(shell, UserAction::ReportDraftBackspace);
        }
        KeyCode::Up => {
            dispatch(shell, UserAction::ReportDraftPrevField);
        }
        KeyCode::Down => {
            dispatch(shell, UserAction::ReportDraftNextField);
        }
        KeyCode::Left if field == ReportField::Category => {
            dispatch(shell, UserAction::ReportDraftPrevCategory);
        }
        KeyCode::Right if field == ReportField::Category => {
            dispatch(shell, UserAction::ReportDraftNextCategory);
        }
        KeyCode::Enter => {
            if field == ReportField::Category {
                if dispatch(shell, UserAction::ReportDraftSubmit) {
                    shell.status = Some("report submitted (+50 pts)".to_string());
                }
            } else {
                dispatch(shell, UserAction::ReportDraftNextField);
            }
        }
        _ => {}
    }
}

fn handle_chat_key(shell: &mut Shell, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) => {
            dispatch(shell, UserAction::ChatInput(ch));
        }
        KeyCode::Backspace => {
            dispatch(shell, UserAction::ChatBackspace);
        }
        KeyCode::Enter => {
            dispatch(shell, UserAction::ChatSubmit);
        }
        _ => {}
    }
}

fn handle_assist_key(shell: &mut Shell, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) => {
            dispatch(shell, UserAction::AssistInput(ch));
        }
        KeyCode::Backspace => {
            dispatch(shell, UserAction::AssistBackspace);
        }
        KeyCode::Enter => {
            dispatch(shell, UserAction::AssistSubmit);
        }
        _ => {}
    }
}

fn handle_rewards_key(shell: &mut Shell, key: KeyEvent) {
    match key.code {
        KeyCode::Up => move_selection(&mut shell.rewards_list, shell.state.rewards.len(), -1),
        KeyCode::Down => move_selection(&mut shell.rewards_list, shell.state.rewards.len(), 1),
        KeyCode::Enter => {
            let Some(idx) = shell.rewards_list.selected() else {
                return;
            };
            let Some(item) = shell.state.rewards.get(idx) else {
                return;
            };
            let (cost, label) = (item.cost, item.label.clone());
            if dispatch(shell, UserAction::PurchaseReward { cost }) {
                shell.status = Some(format!("redeemed '{label}' for {cost} pts"));
            }
        }
        _ => handle_nav_key(shell, key),
    }
}

fn handle_profile_key(shell: &mut Shell, key: KeyEvent) {
    handle_nav_key(shell, key);
}

/// Shared navigation on panels without a text input.
fn handle_nav_key(shell: &mut Shell, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            dispatch(shell, UserAction::Quit);
        }
        KeyCode::Char(ch @ '1'..='6') => {
            let idx = ch as usize - '1' as usize;
            dispatch(shell, UserAction::SelectTab(TAB_ORDER[idx]));
        }
        _ => {}
    }
}

fn move_selection(list: &mut ListState, len: usize, delta: i64) {
    if len == 0 {
        list.select(None);
        return;
    }
    let current = list.selected().unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, len as i64 - 1) as usize;
    list.select(Some(next));
}

fn draw(frame: &mut Frame, shell: &mut Shell) {
    if !shell.state.session.is_logged_in() {
        draw_login(frame, shell);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    match shell.state.routing.tab {
        AppTab::Map => draw_map(frame, shell, chunks[0]),
        AppTab::Report => draw_report(frame, &shell.state, chunks[0]),
        AppTab::Chat => draw_chat(frame, &shell.state, chunks[0]),
        AppTab::AiHelp => draw_assist(frame, &shell.state, chunks[0]),
        AppTab::Rewards => draw_rewards(frame, shell, chunks[0]),
        AppTab::Profile => draw_profile(frame, &shell.state, chunks[0]),
    }

    draw_tab_bar(frame, &shell.state, chunks[1]);
    draw_status(frame, shell, chunks[2]);
}

fn draw_login(frame: &mut Frame, shell: &mut Shell) {
    let area = centered_rect(50, 60, frame.area());
    let items: Vec<ListItem> = shell
        .roster
        .iter()
        .map(|user| ListItem::new(format!("{}  ({} pts)", user.name, user.points)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Civica — sign in ")
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut shell.login_list);

    let hint = Paragraph::new("Up/Down select resident, Enter sign in, q quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    let hint_area = Rect {
        x: frame.area().x,
        y: frame.area().height.saturating_sub(1),
        width: frame.area().width,
        height: 1,
    };
    frame.render_widget(hint, hint_area);
}

fn draw_map(frame: &mut Frame, shell: &mut Shell, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = shell
        .state
        .issues
        .iter()
        .map(|issue| {
            let (marker, color) = match issue.status {
                IssueStatus::Open => ("●", Color::Red),
                IssueStatus::Resolved => ("✔", Color::Green),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(color)),
                Span::raw(issue.title.clone()),
            ]))
        })
        .collect();
    let open = shell.state.open_issue_count();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Issues ({open} open) "))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, halves[0], &mut shell.map_list);

    let detail = shell
        .map_list
        .selected()
        .and_then(|idx| shell.state.issues.get(idx));
    let lines = match detail {
        Some(issue) => vec![
            Line::from(Span::styled(
                issue.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{} · {}",
                issue.category.label(),
                issue.status.label()
            )),
            Line::from(format!(
                "at {:.4}, {:.4}",
                issue.location.lat, issue.location.lng
            )),
            Line::from(match &issue.reported_by {
                Some(id) => format!("reported by {id}"),
                None => "reported anonymously".to_string(),
            }),
            Line::from(""),
            Line::from(issue.description.clone()),
        ],
        None => vec![Line::from("Select an issue to see details.")],
    };
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Detail ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, halves[1]);
}

fn draw_report(frame: &mut Frame, state: &SessionState, area: Rect) {
    let draft = &state.interaction.report_draft;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(area);

    let field_block = |label: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(style)
    };

    let title = Paragraph::new(draft.title.clone()).block(field_block(
        ReportField::Title.label(),
        draft.field == ReportField::Title,
    ));
    frame.render_widget(title, rows[0]);

    let description = Paragraph::new(draft.description.clone())
        .wrap(Wrap { trim: false })
        .block(field_block(
            ReportField::Description.label(),
            draft.field == ReportField::Description,
        ));
    frame.render_widget(description, rows[1]);

    let category = Paragraph::new(format!("◀ {} ▶", draft.category.label())).block(field_block(
        ReportField::Category.label(),
        draft.field == ReportField::Category,
    ));
    frame.render_widget(category, rows[2]);

    let hint = Paragraph::new("Up/Down move fields · Left/Right pick category · Enter on Category submits (+50 pts)")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, rows[3]);
}

fn draw_chat(frame: &mut Frame, state: &SessionState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = state
        .chat
        .iter()
        .map(|message| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}: ", message.author),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(message.body.clone()),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(" Community chat ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, rows[0]);

    let input = Paragraph::new(state.interaction.chat_input.clone())
        .block(Block::default().title(" Message ").borders(Borders::ALL));
    frame.render_widget(input, rows[1]);
}

fn draw_assist(frame: &mut Frame, state: &SessionState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = state
        .assist
        .transcript
        .iter()
        .map(|entry| {
            let (prefix, color) = match entry.role {
                AssistRole::Resident => ("you: ", Color::Cyan),
                AssistRole::Helper => ("helper: ", Color::Green),
            };
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::raw(entry.text.clone()),
            ])
        })
        .collect();
    if state.assist.awaiting_reply {
        lines.push(Line::from(Span::styled(
            "helper is thinking…",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" AI helper ").borders(Borders::ALL));
    frame.render_widget(transcript, rows[0]);

    let input = Paragraph::new(state.interaction.assist_input.clone())
        .block(Block::default().title(" Ask ").borders(Borders::ALL));
    frame.render_widget(input, rows[1]);
}

fn draw_rewards(frame: &mut Frame, shell: &mut Shell, area: Rect) {
    let points = shell.state.points();
    let items: Vec<ListItem> = shell
        .state
        .rewards
        .iter()
        .map(|item| {
            let affordable = item.cost <= points;
            let style = if affordable {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Span::styled(
                format!("{:<40} {:>5} pts", item.label, item.cost),
                style,
            ))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Rewards — balance {points} pts "))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut shell.rewards_list);
}

fn draw_profile(frame: &mut Frame, state: &SessionState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    let lines = match state.current_user() {
        Some(user) => vec![
            Line::from(Span::styled(
                user.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{} points", user.points)),
            Line::from(format!(
                "{} reported · {} resolved",
                user.reported_issues.len(),
                user.resolved_issues.len()
            )),
            Line::from(Span::styled(
                "Ctrl+L signs out",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![Line::from("Not signed in.")],
    };
    let summary = Paragraph::new(lines)
        .block(Block::default().title(" Profile ").borders(Borders::ALL));
    frame.render_widget(summary, rows[0]);

    let items: Vec<ListItem> = state
        .activity
        .iter()
        .rev()
        .take(50)
        .map(|entry| ListItem::new(entry.message.clone()))
        .collect();
    let activity = List::new(items).block(
        Block::default()
            .title(" Recent activity ")
            .borders(Borders::ALL),
    );
    frame.render_widget(activity, rows[1]);
}

fn draw_tab_bar(frame: &mut Frame, state: &SessionState, area: Rect) {
    let titles: Vec<Line> = TAB_ORDER
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!("{} {}", idx + 1, tab.label())))
        .collect();
    let selected = TAB_ORDER
        .iter()
        .position(|tab| *tab == state.routing.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_status(frame: &mut Frame, shell: &Shell, area: Rect) {
    let (text, style) = match &shell.status {
        Some(status) => (status.clone(), Style::default().fg(Color::Yellow)),
        None => (
            "Tab/Shift+Tab switch panels · Ctrl+Q quit".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
