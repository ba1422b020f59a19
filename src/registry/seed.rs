//! Seed data for the registry.
//!
//! Registry contents are fixed at startup: either the built-in roster below
//! or a TOML seed file named in the configuration. Seed data is validated
//! before the registry accepts it; validation reports every problem found,
//! not just the first.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::activity::Activity;

/// One activity as declared in seed data.
///
/// Unlike [`Activity`], the name is carried inline because seed files are a
/// flat list of `[[activity]]` tables.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedActivity {
    /// Unique activity name; becomes the registry key.
    pub name: String,

    pub description: String,

    pub schedule: String,

    pub max_participants: u32,

    /// Pre-enrolled emails, in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl SeedActivity {
    /// Split into the registry key and record.
    pub fn into_entry(self) -> (String, Activity) {
        (
            self.name,
            Activity {
                description: self.description,
                schedule: self.schedule,
                max_participants: self.max_participants,
                participants: self.participants,
            },
        )
    }
}

/// Top-level shape of a TOML seed file: a list of `[[activity]]` tables.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedFile {
    #[serde(default, rename = "activity")]
    pub activities: Vec<SeedActivity>,
}

/// Error type for seed loading.
#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(Vec<String>),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "IO error: {}", e),
            SeedError::Parse(e) => write!(f, "Parse error: {}", e),
            SeedError::Invalid(problems) => {
                write!(f, "Invalid seed: ")?;
                for (i, p) in problems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", p)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SeedError {}

/// Load and validate a TOML seed file.
pub fn load_seed_file(path: &Path) -> Result<Vec<SeedActivity>, SeedError> {
    let content = fs::read_to_string(path).map_err(SeedError::Io)?;
    let file: SeedFile = toml::from_str(&content).map_err(SeedError::Parse)?;

    validate_seed(&file.activities)?;

    Ok(file.activities)
}

/// Check seed invariants: unique non-empty names, non-empty text fields,
/// positive capacity, distinct participants within capacity.
pub fn validate_seed(activities: &[SeedActivity]) -> Result<(), SeedError> {
    let mut problems = Vec::new();
    let mut seen_names = std::collections::BTreeSet::new();

    for activity in activities {
        let name = activity.name.as_str();
        if name.is_empty() {
            problems.push("activity with empty name".to_string());
            continue;
        }
        if !seen_names.insert(name) {
            problems.push(format!("duplicate activity name '{}'", name));
        }
        if activity.description.is_empty() {
            problems.push(format!("'{}': empty description", name));
        }
        if activity.schedule.is_empty() {
            problems.push(format!("'{}': empty schedule", name));
        }
        if activity.max_participants == 0 {
            problems.push(format!("'{}': max_participants must be positive", name));
        }
        if activity.participants.len() > activity.max_participants as usize {
            problems.push(format!(
                "'{}': {} participants exceed capacity {}",
                name,
                activity.participants.len(),
                activity.max_participants
            ));
        }
        let mut seen_emails = std::collections::BTreeSet::new();
        for email in &activity.participants {
            if !seen_emails.insert(email.as_str()) {
                problems.push(format!("'{}': duplicate participant '{}'", name, email));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(SeedError::Invalid(problems))
    }
}

/// The built-in roster used when no seed file is configured.
pub fn default_activities() -> Vec<SeedActivity> {
    fn entry(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> SeedActivity {
        SeedActivity {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        entry(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        entry(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        entry(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        entry(
            "Soccer Team",
            "Join the school soccer team and compete in inter-school matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        entry(
            "Basketball Team",
            "Practice basketball skills and play in the school league",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        entry(
            "Art Club",
            "Explore painting, drawing, and other visual arts",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        entry(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        entry(
            "Math Club",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        entry(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_seed_is_valid() {
        let activities = default_activities();
        assert!(validate_seed(&activities).is_ok());
        assert_eq!(activities.len(), 9);
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut activities = default_activities();
        let dup = activities[0].clone();
        activities.push(dup);

        let err = validate_seed(&activities).unwrap_err();
        match err {
            SeedError::Invalid(problems) => {
                assert!(problems.iter().any(|p| p.contains("duplicate activity name")));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let activities = vec![SeedActivity {
            name: "Broken Club".to_string(),
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.edu".to_string(), "a@x.edu".to_string()],
        }];

        let err = validate_seed(&activities).unwrap_err();
        match err {
            SeedError::Invalid(problems) => {
                // empty description, empty schedule, over capacity, duplicate email
                assert_eq!(problems.len(), 4);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_seed_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[activity]]
name = "Robotics Club"
description = "Build and program robots"
schedule = "Wednesdays, 3:30 PM - 5:00 PM"
max_participants = 8
participants = ["grace@mergington.edu"]
"#
        )
        .unwrap();

        let activities = load_seed_file(file.path()).unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Robotics Club");
        assert_eq!(activities[0].participants, vec!["grace@mergington.edu"]);
    }

    #[test]
    fn test_load_seed_file_rejects_zero_capacity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[activity]]
name = "Empty Club"
description = "x"
schedule = "y"
max_participants = 0
"#
        )
        .unwrap();

        assert!(load_seed_file(file.path()).is_err());
    }
}
