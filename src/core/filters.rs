use crate::core::categories::activities_for;
use crate::models::{AvailabilityFilter, CoachRecord, FilterCriteria};

/// Primary query predicate.
///
/// A free-text query matches case-insensitively against the activity label or
/// the coach name. With no free text, a present category passes exactly the
/// coaches whose activity label belongs to that category's fixed expansion.
/// With neither, every coach passes.
#[inline]
pub fn matches_query(coach: &CoachRecord, criteria: &FilterCriteria) -> bool {
    if let Some(query) = present(&criteria.query) {
        let query = query.to_lowercase();
        return coach.activity_type.to_lowercase().contains(&query)
            || coach.name.to_lowercase().contains(&query);
    }

    if let Some(category) = present(&criteria.category) {
        return match activities_for(category) {
            Some(activities) => activities.iter().any(|a| *a == coach.activity_type),
            None => false,
        };
    }

    true
}

/// Case-insensitive substring match against the coach name
#[inline]
pub fn matches_name(coach: &CoachRecord, name_filter: &str) -> bool {
    if name_filter.is_empty() {
        return true;
    }
    coach.name.to_lowercase().contains(&name_filter.to_lowercase())
}

/// Availability tri-state: `All` always passes, otherwise the flag must match
#[inline]
pub fn matches_availability(coach: &CoachRecord, filter: AvailabilityFilter) -> bool {
    match filter {
        AvailabilityFilter::All => true,
        AvailabilityFilter::Available => coach.is_available,
        AvailabilityFilter::Busy => !coach.is_available,
    }
}

/// Case-insensitive substring match against the location label
#[inline]
pub fn matches_location(coach: &CoachRecord, location_filter: &str) -> bool {
    if location_filter.is_empty() {
        return true;
    }
    coach.location.to_lowercase().contains(&location_filter.to_lowercase())
}

/// Activity-type selector: absent or "all" passes, otherwise the label must
/// match exactly
#[inline]
pub fn matches_activity(coach: &CoachRecord, selector: Option<&str>) -> bool {
    match selector {
        None => true,
        Some(s) if s.is_empty() || s.eq_ignore_ascii_case("all") => true,
        Some(s) => coach.activity_type == s,
    }
}

#[inline]
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_coach(name: &str, activity: &str, available: bool, location: &str) -> CoachRecord {
        CoachRecord {
            id: "1".to_string(),
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

    #[test]
    fn test_query_matches_activity_label() {
        let coach = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");
        let criteria = FilterCriteria {
            query: Some("tennis".to_string()),
            ..FilterCriteria::default()
        };

        assert!(matches_query(&coach, &criteria));
    }

    #[test]
    fn test_query_matches_name() {
        let coach = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");
        let criteria = FilterCriteria {
            query: Some("johnson".to_string()),
            ..FilterCriteria::default()
        };

        assert!(matches_query(&coach, &criteria));
    }

    #[test]
    fn test_query_takes_precedence_over_category() {
        // A free-text query is the primary predicate; the category is only
        // consulted when no query is present.
        let coach = create_test_coach("Mike Chen", "Piano", false, "Manhattan Music Studio");
        let criteria = FilterCriteria {
            query: Some("tennis".to_string()),
            category: Some("Education".to_string()),
            ..FilterCriteria::default()
        };

        assert!(!matches_query(&coach, &criteria));
    }

    #[test]
    fn test_category_expansion() {
        let piano = create_test_coach("Mike Chen", "Piano", false, "Manhattan Music Studio");
        let tennis = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");
        let criteria = FilterCriteria {
            category: Some("Education".to_string()),
            ..FilterCriteria::default()
        };

        assert!(matches_query(&piano, &criteria));
        assert!(!matches_query(&tennis, &criteria));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let coach = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");
        let criteria = FilterCriteria {
            category: Some("Cooking".to_string()),
            ..FilterCriteria::default()
        };

        assert!(!matches_query(&coach, &criteria));
    }

    #[test]
    fn test_empty_query_always_passes() {
        let coach = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");
        let criteria = FilterCriteria {
            query: Some(String::new()),
            ..FilterCriteria::default()
        };

        assert!(matches_query(&coach, &criteria));
    }

    #[test]
    fn test_name_filter() {
        let coach = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");

        assert!(matches_name(&coach, ""));
        assert!(matches_name(&coach, "sarah"));
        assert!(matches_name(&coach, "JOHNSON"));
        assert!(!matches_name(&coach, "mike"));
    }

    #[test]
    fn test_availability_tri_state() {
        let available = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");
        let busy = create_test_coach("Mike Chen", "Piano", false, "Manhattan Music Studio");

        assert!(matches_availability(&available, AvailabilityFilter::All));
        assert!(matches_availability(&busy, AvailabilityFilter::All));
        assert!(matches_availability(&available, AvailabilityFilter::Available));
        assert!(!matches_availability(&busy, AvailabilityFilter::Available));
        assert!(matches_availability(&busy, AvailabilityFilter::Busy));
        assert!(!matches_availability(&available, AvailabilityFilter::Busy));
    }

    #[test]
    fn test_location_filter() {
        let coach = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");

        assert!(matches_location(&coach, ""));
        assert!(matches_location(&coach, "central park"));
        assert!(matches_location(&coach, "nyc"));
        assert!(!matches_location(&coach, "brooklyn"));
    }

    #[test]
    fn test_activity_selector_is_exact() {
        let coach = create_test_coach("Sarah Johnson", "Tennis", true, "Central Park, NYC");

        assert!(matches_activity(&coach, None));
        assert!(matches_activity(&coach, Some("all")));
        assert!(matches_activity(&coach, Some("Tennis")));
        // Exact equality, unlike the substring filters
        assert!(!matches_activity(&coach, Some("tennis")));
        assert!(!matches_activity(&coach, Some("Ten")));
    }
}
