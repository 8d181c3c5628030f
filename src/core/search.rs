use crate::core::filters::{
    matches_activity, matches_availability, matches_location, matches_name, matches_query,
};
use crate::models::{CoachRecord, FilterCriteria};

/// Result of running the filter pipeline
#[derive(Debug)]
pub struct SearchResult {
    pub coaches: Vec<CoachRecord>,
    pub total_candidates: usize,
}

/// Apply the full predicate set to the directory.
///
/// Predicates compose with logical AND; inactive predicates are always-true.
/// The relative order of the input directory is preserved: the pipeline
/// removes records, it never reorders them. The function is pure, so the same
/// directory and criteria always produce the same result.
pub fn filter_coaches(coaches: Vec<CoachRecord>, criteria: &FilterCriteria) -> SearchResult {
    let total_candidates = coaches.len();

    let coaches = coaches
        .into_iter()
        .filter(|coach| matches_query(coach, criteria))
        .filter(|coach| matches_name(coach, &criteria.name))
        .filter(|coach| matches_availability(coach, criteria.availability))
        .filter(|coach| matches_location(coach, &criteria.location))
        .filter(|coach| matches_activity(coach, criteria.activity.as_deref()))
        .collect();

    SearchResult {
        coaches,
        total_candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AvailabilityFilter;

    fn create_coach(id: &str, name: &str, activity: &str, available: bool, location: &str) -> CoachRecord {
        CoachRecord {
            id: id.to_string(),
            name: name.to_string(),
            activity_type: activity.to_string(),
            is_available: available,
            location: location.to_string(),
            rating: 4.8,
            price: None,
            experience: None,
            description: None,
        }
    }

    fn create_directory() -> Vec<CoachRecord> {
        vec![
            create_coach("1", "Sarah Johnson", "Tennis", true, "Central Park, NYC"),
            create_coach("2", "Mike Chen", "Piano", false, "Manhattan Music Studio"),
            create_coach("3", "Dr. Emily Rodriguez", "Math Tutoring", true, "Online & Home visits"),
            create_coach("4", "David Kim", "Swimming", true, "Aquatic Center Downtown"),
            create_coach("5", "Jessica Martinez", "Guitar", true, "Music Academy West Side"),
        ]
    }

    #[test]
    fn test_free_text_query() {
        let criteria = FilterCriteria {
            query: Some("tennis".to_string()),
            ..FilterCriteria::default()
        };

        let result = filter_coaches(create_directory(), &criteria);

        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.coaches.len(), 1);
        assert_eq!(result.coaches[0].id, "1");
    }

    #[test]
    fn test_category_browse() {
        let criteria = FilterCriteria {
            category: Some("Education".to_string()),
            ..FilterCriteria::default()
        };

        let result = filter_coaches(create_directory(), &criteria);

        // Piano, Math Tutoring and Guitar belong to Education
        let ids: Vec<&str> = result.coaches.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["2", "3", "5"]);
    }

    #[test]
    fn test_predicates_compose_with_and() {
        let criteria = FilterCriteria {
            category: Some("Education".to_string()),
            availability: AvailabilityFilter::Available,
            ..FilterCriteria::default()
        };

        let result = filter_coaches(create_directory(), &criteria);

        // Mike Chen is Education but busy
        let ids: Vec<&str> = result.coaches.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["3", "5"]);
    }

    #[test]
    fn test_unfiltered_criteria_returns_everything() {
        let result = filter_coaches(create_directory(), &FilterCriteria::default());

        assert_eq!(result.coaches.len(), 5);
        let ids: Vec<&str> = result.coaches.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let criteria = FilterCriteria {
            availability: AvailabilityFilter::Available,
            ..FilterCriteria::default()
        };

        let result = filter_coaches(create_directory(), &criteria);

        let ids: Vec<&str> = result.coaches.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "4", "5"]);
    }

    #[test]
    fn test_idempotent() {
        let criteria = FilterCriteria {
            query: Some("m".to_string()),
            location: "music".to_string(),
            ..FilterCriteria::default()
        };

        let first = filter_coaches(create_directory(), &criteria);
        let second = filter_coaches(create_directory(), &criteria);

        let first_ids: Vec<&str> = first.coaches.iter().map(|c| c.id.as_str()).collect();
        let second_ids: Vec<&str> = second.coaches.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let criteria = FilterCriteria {
            query: Some("archery".to_string()),
            ..FilterCriteria::default()
        };

        let result = filter_coaches(create_directory(), &criteria);

        assert!(result.coaches.is_empty());
        assert_eq!(result.total_candidates, 5);
    }

    #[test]
    fn test_cleared_criteria_matches_full_directory() {
        let mut criteria = FilterCriteria {
            query: Some("tennis".to_string()),
            name: "sarah".to_string(),
            availability: AvailabilityFilter::Busy,
            location: "nyc".to_string(),
            activity: Some("Tennis".to_string()),
            ..FilterCriteria::default()
        };

        criteria.clear();
        let result = filter_coaches(create_directory(), &criteria);

        assert_eq!(result.coaches.len(), 5);
    }
}
