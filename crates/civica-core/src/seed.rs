//! Built-in demo data plus an optional YAML seed file. The shell starts
//! against this data until it is pointed at real backends.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::state::GeoPoint;
use crate::state::Issue;
use crate::state::IssueCategory;
use crate::state::IssueId;
use crate::state::IssueStatus;
use crate::state::RewardItem;
use crate::state::User;
use crate::state::UserId;

pub fn demo_users() -> Vec<User> {
    vec![
        user("u-ana", "Ana Reyes", 100),
        user("u-ben", "Ben Okafor", 275),
        user("u-chiara", "Chiara Moretti", 40),
    ]
}

pub fn demo_issues() -> Vec<Issue> {
    vec![
        issue(
            "seed-0001",
            "Pothole on Alder & 5th",
            "Deep pothole in the eastbound lane, bikes swerving into traffic.",
            IssueCategory::Pothole,
            45.5189,
            -122.6756,
            IssueStatus::Open,
        ),
        issue(
            "seed-0002",
            "Streetlight out at Couch Park",
            "North entrance light has been dark for a week.",
            IssueCategory::Streetlight,
            45.5265,
            -122.6903,
            IssueStatus::Open,
        ),
        issue(
            "seed-0003",
            "Overflowing bins behind the market",
            "Garbage spilling into the alley, attracting gulls.",
            IssueCategory::Garbage,
            45.5221,
            -122.6712,
            IssueStatus::Resolved,
        ),
        issue(
            "seed-0004",
            "Tag on the Morrison underpass",
            "Fresh graffiti over the community mural.",
            IssueCategory::Graffiti,
            45.5172,
            -122.6681,
            IssueStatus::Open,
        ),
        issue(
            "seed-0005",
            "Water pooling on Salmon St",
            "Steady leak from the curbside main, pavement starting to sag.",
            IssueCategory::WaterLeak,
            45.5144,
            -122.6820,
            IssueStatus::Open,
        ),
    ]
}

pub fn demo_rewards() -> Vec<RewardItem> {
    vec![
        reward("rw-transit", "One-week transit pass", 200),
        reward("rw-tree", "Street tree planted in your name", 150),
        reward("rw-pool", "Community pool day pass", 75),
        reward("rw-market", "Farmers market voucher", 300),
    ]
}

fn user(id: &str, name: &str, points: u32) -> User {
    User {
        id: UserId(id.to_string()),
        name: name.to_string(),
        points,
        reported_issues: Vec::new(),
        resolved_issues: Vec::new(),
    }
}

fn issue(
    id: &str,
    title: &str,
    description: &str,
    category: IssueCategory,
    lat: f64,
    lng: f64,
    status: IssueStatus,
) -> Issue {
    Issue {
        id: IssueId(id.to_string()),
        title: title.to_string(),
        description: description.to_string(),
        category,
        location: GeoPoint { lat, lng },
        status,
        reported_by: None,
        reported_at_ms: 0,
    }
}

fn reward(id: &str, label: &str, cost: u32) -> RewardItem {
    RewardItem {
        id: id.to_string(),
        label: label.to_string(),
        cost,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedFile {
    pub issues: Vec<SeedIssue>,
    pub rewards: Vec<RewardItem>,
}

impl Default for SeedFile {
    fn default() -> Self {
        Self {
            issues: Vec::new(),
            rewards: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedIssue {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: IssueCategory,
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "open_status")]
    pub status: IssueStatus,
}

fn open_status() -> IssueStatus {
    IssueStatus::Open
}

impl SeedFile {
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
            .into_iter()
            .map(|seed| Issue {
                id: IssueId(seed.id),
                title: seed.title,
                description: seed.description,
                category: seed.category,
                location: GeoPoint {
                    lat: seed.lat,
                    lng: seed.lng,
                },
                status: seed.status,
                reported_by: None,
                reported_at_ms: 0,
            })
            .collect()
    }
}

pub fn load_seed(path: impl AsRef<Path>) -> std::io::Result<SeedFile> {
    let text = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&text).map_err(|err| std::io::Error::other(format!("parse seed: {err}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::demo_issues;
    use super::demo_rewards;
    use super::demo_users;
    use super::SeedFile;
    use crate::state::IssueCategory;
    use crate::state::IssueStatus;

    #[test]
    fn demo_data_has_unique_ids() {
        let issues = demo_issues();
        for (idx, issue) in issues.iter().enumerate() {
            assert!(
                issues[idx + 1..].iter().all(|other| other.id != issue.id),
                "duplicate seed id {}",
                issue.id
            );
        }
        assert!(!demo_users().is_empty());
        assert!(!demo_rewards().is_empty());
    }

    #[test]
    fn seed_file_parses_with_defaults() {
        let yaml = r#"
issues:
  - id: y-1
    title: Cracked sidewalk
    category: other
    lat: 45.51
    lng: -122.67
rewards:
  - id: rw-1
    label: Library tote
    cost: 50
"#;
        let seed: SeedFile = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(seed.rewards.len(), 1);
        let issues = seed.into_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, IssueCategory::Other);
        assert_eq!(issues[0].status, IssueStatus::Open);
        assert_eq!(issues[0].description, "");
    }

    #[test]
    fn empty_seed_file_is_valid() {
        let seed: SeedFile = serde_yaml::from_str("{}").expect("parse");
        assert!(seed.issues.is_empty());
        assert!(seed.rewards.is_empty());
    }
}
