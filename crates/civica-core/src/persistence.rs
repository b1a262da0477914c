use std::fs::File;
use std::fs::OpenOptions;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

/// One journaled session transition. Only applied mutations are recorded;
/// rejected transitions never reach the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersistedSessionEvent {
    SessionStarted {
        user_id: String,
        user_name: String,
        starting_points: u32,
    },
    IssueReported {
        issue_id: String,
        title: String,
        category: String,
        reporter: Option<String>,
        points_awarded: u32,
    },
    IssueResolved {
        issue_id: String,
        resolver: Option<String>,
        points_awarded: u32,
    },
    RewardPurchased {
        user_id: String,
        cost: u32,
        balance_after: u32,
    },
    SessionEnded {
        user_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSessionRecord {
    pub seq: u64,
    pub ts_ms: i64,
    #[serde(flatten)]
    pub event: PersistedSessionEvent,
}

#[derive(Debug)]
pub struct SessionEventStore {
    path: PathBuf,
    snapshot_path: PathBuf,
    next_seq: u64,
}

impl SessionEventStore {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let existing = load_records(path.as_path())?;
        let next_seq = existing
            .iter()
            .map(|record| record.seq)
            .max()
            .map_or(1, |seq| seq.saturating_add(1));
        let snapshot_path = path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("session-snapshot.json");
        Ok(Self {
            path,
            snapshot_path,
            next_seq,
        })
    }

    pub fn append(&mut self, event: PersistedSessionEvent) -> std::io::Result<u64> {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        let record = PersistedSessionRecord {
            seq,
            ts_ms: chrono::Utc::now().timestamp_millis(),
            event,
        };
        let line = serde_json::to_string(&record)
            .map_err(|err| std::io::Error::other(format!("serialize: {err}")))?;
        append_line(self.path.as_path(), line.as_str())?;
        Ok(seq)
    }

    pub fn load(&self) -> std::io::Result<Vec<PersistedSessionRecord>> {
        load_records(self.path.as_path())
    }

    pub fn load_since(
        &self,
        seq_exclusive: u64,
    ) -> std::io::Result<Vec<PersistedSessionRecord>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .filter(|record| record.seq > seq_exclusive)
            .collect())
    }

    pub fn save_snapshot(&self, snapshot: &PersistedSessionSnapshot) -> std::io::Result<()> {
        let encoded = serde_json::to_vec(snapshot)
            .map_err(|err| std::io::Error::other(format!("serialize snapshot: {err}")))?;
        std::fs::write(&self.snapshot_path, encoded)
    }

    pub fn load_snapshot(&self) -> std::io::Result<Option<PersistedSessionSnapshot>> {
        if !self.snapshot_path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&self.snapshot_path)?;
        let snapshot = serde_json::from_slice::<PersistedSessionSnapshot>(&bytes)
            .map_err(|err| std::io::Error::other(format!("parse snapshot: {err}")))?;
        Ok(Some(snapshot))
    }
}

/// The latest session as reconstructed from the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayedSession {
    pub user_id: String,
    pub user_name: String,
    pub points: u32,
    pub reported_issues: Vec<String>,
    pub resolved_issues: Vec<String>,
    pub ended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSessionSnapshot {
    pub version: u8,
    pub seq: u64,
    pub session: Option<ReplayedSession>,
}

pub fn replay_latest_session(records: &[PersistedSessionRecord]) -> Option<ReplayedSession> {
    replay_session_from(None, records)
}

pub fn replay_session_from(
    initial: Option<ReplayedSession>,
    records: &[PersistedSessionRecord],
) -> Option<ReplayedSession> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.seq);

    let mut latest = initial;
    for record in sorted {
        match record.event {
            PersistedSessionEvent::SessionStarted {
                user_id,
                user_name,
                starting_points,
            } => {
                latest = Some(ReplayedSession {
                    user_id,
                    user_name,
                    points: starting_points,
                    reported_issues: Vec::new(),
                    resolved_issues: Vec::new(),
                    ended: false,
                });
            }
            PersistedSessionEvent::IssueReported {
                issue_id,
                reporter,
                points_awarded,
                ..
            } => {
                if let Some(session) = latest.as_mut() {
                    if !session.ended && reporter.as_deref() == Some(session.user_id.as_str()) {
                        session.points = session.points.saturating_add(points_awarded);
                        session.reported_issues.push(issue_id);
                    }
                }
            }
            PersistedSessionEvent::IssueResolved {
                issue_id,
                resolver,
                points_awarded,
            } => {
                if let Some(session) = latest.as_mut() {
                    if !session.ended && resolver.as_deref() == Some(session.user_id.as_str()) {
                        session.points = session.points.saturating_add(points_awarded);
                        session.resolved_issues.push(issue_id);
                    }
                }
            }
            PersistedSessionEvent::RewardPurchased {
                user_id,
                balance_after,
                ..
            } => {
                if let Some(session) = latest.as_mut() {
                    if !session.ended && session.user_id == user_id {
                        session.points = balance_after;
                    }
                }
            }
            PersistedSessionEvent::SessionEnded { user_id } => {
                if let Some(session) = latest.as_mut() {
                    if session.user_id == user_id {
                        session.ended = true;
                    }
                }
            }
        }
    }

    latest
}

fn load_records(path: &Path) -> std::io::Result<Vec<PersistedSessionRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(record) = serde_json::from_str::<PersistedSessionRecord>(&line) {
            records.push(record);
        }
    }
    Ok(records)
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let mut file = opts.open(path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;
    Ok(())
}
