//! Seed catalog and its one-time normalization
//!
//! Seeds may use the legacy `participants` list, the `members` map, or both.
//! Normalization happens once when the registry is built, so the operations
//! only ever see the member/role shape.

use super::types::{Activity, Role};
use crate::utils::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// One activity as written in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    /// Unique activity name
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Free text schedule
    #[serde(default)]
    pub schedule: String,
    /// Roster capacity, must be positive
    pub max_participants: u32,
    /// Legacy roster: every email becomes a participant
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<String>,
    /// Email to role labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub members: BTreeMap<String, Vec<String>>,
}

impl ActivitySeed {
    /// Seed with a legacy participant roster
    pub fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
            members: BTreeMap::new(),
        }
    }

    /// Normalize into the member/role shape.
    ///
    /// Duplicate labels collapse; blank emails and members listed with no
    /// roles are dropped.
    pub fn into_activity(self) -> (String, Activity) {
        let mut activity = Activity::new(self.description, self.schedule, self.max_participants);

        for email in self.participants.iter().filter(|e| !e.trim().is_empty()) {
            activity.grant(email, Role::Participant);
        }
        for (email, labels) in self.members {
            if email.trim().is_empty() {
                continue;
            }
            for label in labels {
                activity.grant(&email, Role::from(label));
            }
        }

        (self.name, activity)
    }
}

/// On-disk catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Seeded activities
    #[serde(default)]
    pub activities: Vec<ActivitySeed>,
}

/// Check names are unique and capacities positive
pub fn validate_seeds(seeds: &[ActivitySeed]) -> Result<()> {
    let mut names = HashSet::new();
    for seed in seeds {
        if seed.name.trim().is_empty() {
            return Err(ServerError::Config(
                "Activity name cannot be empty".to_string(),
            ));
        }
        if !names.insert(seed.name.as_str()) {
            return Err(ServerError::Config(format!(
                "Duplicate activity name: {}",
                seed.name
            )));
        }
        if seed.max_participants == 0 {
            return Err(ServerError::Config(format!(
                "max_participants must be positive for activity: {}",
                seed.name
            )));
        }
    }
    Ok(())
}

/// Load a catalog from a YAML file
pub async fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ActivitySeed>> {
    let path = path.as_ref();
    info!("Loading activity catalog from: {:?}", path);

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ServerError::Config(format!("Failed to read catalog file: {}", e)))?;

    let catalog: Catalog = serde_yaml::from_str(&content)
        .map_err(|e| ServerError::Config(format!("Failed to parse catalog: {}", e)))?;

    validate_seeds(&catalog.activities)?;

    debug!("Loaded {} activities", catalog.activities.len());
    Ok(catalog.activities)
}

/// The Mergington High School catalog
pub fn default_catalog() -> Vec<ActivitySeed> {
    vec![
        ActivitySeed::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        ActivitySeed::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        ActivitySeed::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        ActivitySeed::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        ActivitySeed::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        ActivitySeed::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}
