use crate::models::CoachRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading the coach directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML seed file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported seed file format: {0}")]
    UnsupportedFormat(String),

    #[error("Duplicate coach id in seed data: {0}")]
    DuplicateId(String),
}

/// Read-only provider of coach records.
///
/// The search pipeline and the booking flow only ever read from the
/// directory; swapping the in-memory seed for a real backend means
/// implementing this trait, nothing else changes.
pub trait CoachDirectory: Send + Sync {
    /// All coaches in their stable directory order
    fn list_coaches(&self) -> Vec<CoachRecord>;

    /// Look up a single coach. An absent id is a normal outcome, not an
    /// error.
    fn find_coach_by_id(&self, id: &str) -> Option<CoachRecord>;
}

/// In-memory directory backed by a fixed record list
pub struct StaticDirectory {
    coaches: Vec<CoachRecord>,
}

/// On-disk seed layout for TOML files (`[[coaches]]` tables)
#[derive(Debug, Deserialize)]
struct SeedFile {
    coaches: Vec<CoachRecord>,
}

impl StaticDirectory {
    /// Build a directory from a record list, rejecting duplicate ids
    pub fn new(coaches: Vec<CoachRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for coach in &coaches {
            if !seen.insert(coach.id.as_str()) {
                return Err(DirectoryError::DuplicateId(coach.id.clone()));
            }
        }

        Ok(Self { coaches })
    }

    /// Load records from a JSON (top-level array) or TOML (`[[coaches]]`)
    /// seed file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let coaches = match extension {
            "json" => serde_json::from_str::<Vec<CoachRecord>>(&raw)?,
            "toml" => toml::from_str::<SeedFile>(&raw)?.coaches,
            other => return Err(DirectoryError::UnsupportedFormat(other.to_string())),
        };

        Self::new(coaches)
    }

    /// Built-in directory used when no seed file is configured
    pub fn with_seed_data() -> Self {
        let coaches = vec![
            CoachRecord {
                id: "1".to_string(),
                name: "Sarah Johnson".to_string(),
                activity_type: "Tennis".to_string(),
                is_available: true,
                location: "Central Park, NYC".to_string(),
                rating: 4.9,
                price: Some(60.0),
                experience: Some("5+ years".to_string()),
                description: Some(
                    "Professional tennis coach specializing in beginner to intermediate level training."
                        .to_string(),
                ),
            },
            CoachRecord {
                id: "2".to_string(),
                name: "Mike Chen".to_string(),
                activity_type: "Piano".to_string(),
                is_available: false,
                location: "Manhattan Music Studio".to_string(),
                rating: 4.8,
                price: Some(75.0),
                experience: Some("10+ years".to_string()),
                description: Some(
                    "Classically trained pianist teaching classical, jazz and contemporary styles."
                        .to_string(),
                ),
            },
            CoachRecord {
                id: "3".to_string(),
                name: "Dr. Emily Rodriguez".to_string(),
                activity_type: "Math Tutoring".to_string(),
                is_available: true,
                location: "Online & Home visits".to_string(),
                rating: 4.95,
                price: None,
                experience: Some("8+ years".to_string()),
                description: Some(
                    "PhD in Mathematics covering algebra, calculus, statistics and test preparation."
                        .to_string(),
                ),
            },
            CoachRecord {
                id: "4".to_string(),
                name: "David Kim".to_string(),
                activity_type: "Swimming".to_string(),
                is_available: true,
                location: "Aquatic Center Downtown".to_string(),
                rating: 4.7,
                price: Some(45.0),
                experience: Some("6+ years".to_string()),
                description: Some(
                    "Former competitive swimmer coaching stroke technique, endurance and water safety."
                        .to_string(),
                ),
            },
            CoachRecord {
                id: "5".to_string(),
                name: "Jessica Martinez".to_string(),
                activity_type: "Guitar".to_string(),
                is_available: true,
                location: "Music Academy West Side".to_string(),
                rating: 4.85,
                price: None,
                experience: Some("7+ years".to_string()),
                description: Some(
                    "Professional guitarist teaching rock, blues, classical and acoustic styles."
                        .to_string(),
                ),
            },
        ];

        // The built-in seed has unique ids
        Self { coaches }
    }

    pub fn len(&self) -> usize {
        self.coaches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coaches.is_empty()
    }
}

impl CoachDirectory for StaticDirectory {
    fn list_coaches(&self) -> Vec<CoachRecord> {
        self.coaches.clone()
    }

    fn find_coach_by_id(&self, id: &str) -> Option<CoachRecord> {
        self.coaches.iter().find(|c| c.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_coach(id: &str) -> CoachRecord {
        CoachRecord {
            id: id.to_string(),
            name: format!("Coach {}", id),
            activity_type: "Tennis".to_string(),
            is_available: true,
            location: "NYC".to_string(),
            rating: 4.5,
            price: None,
            experience: None,
            description: None,
        }
    }

    #[test]
    fn test_seed_data_order_is_stable() {
        let directory = StaticDirectory::with_seed_data();

        let ids: Vec<String> = directory.list_coaches().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_find_by_id() {
        let directory = StaticDirectory::with_seed_data();

        let coach = directory.find_coach_by_id("3").expect("coach 3 should exist");
        assert_eq!(coach.name, "Dr. Emily Rodriguez");

        assert!(directory.find_coach_by_id("999").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = StaticDirectory::new(vec![create_coach("1"), create_coach("1")]);

        assert!(matches!(result, Err(DirectoryError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn test_json_seed_file() {
        let path = std::env::temp_dir().join("skedy_seed_test.json");
        std::fs::write(
            &path,
            r#"[{"id":"10","name":"Anna Lee","activityType":"Violin","isAvailable":true,"location":"Uptown","rating":4.6}]"#,
        )
        .unwrap();

        let directory = StaticDirectory::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.find_coach_by_id("10").unwrap().activity_type, "Violin");
    }

    #[test]
    fn test_toml_seed_file() {
        let path = std::env::temp_dir().join("skedy_seed_test.toml");
        std::fs::write(
            &path,
            "[[coaches]]\nid = \"20\"\nname = \"Ben Ortiz\"\nactivityType = \"Soccer\"\nlocation = \"Riverside Field\"\nrating = 4.4\n",
        )
        .unwrap();

        let directory = StaticDirectory::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let coach = directory.find_coach_by_id("20").unwrap();
        // isAvailable falls back to true when the seed omits it
        assert!(coach.is_available);
    }

    #[test]
    fn test_unsupported_seed_format() {
        let path = std::env::temp_dir().join("skedy_seed_test.yaml");
        std::fs::write(&path, "coaches: []").unwrap();

        let result = StaticDirectory::from_path(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(DirectoryError::UnsupportedFormat(ext)) if ext == "yaml"));
    }
}
