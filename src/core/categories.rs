/// A browse-by-category entry mapping a coarse label to its activity labels
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub activities: &'static [&'static str],
}

/// Fixed category table backing the browse-by-category entry points.
///
/// The association is an enumerated constant, never inferred from the
/// directory contents at runtime.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Sports",
        activities: &["Tennis", "Swimming", "Basketball", "Soccer"],
    },
    Category {
        name: "Education",
        activities: &["Math Tutoring", "English Tutoring", "Piano", "Guitar", "Violin"],
    },
];

/// Look up the activity labels for a category.
///
/// The key comparison is case-insensitive; unknown categories return `None`,
/// which the query predicate treats as matching nothing.
pub fn activities_for(category: &str) -> Option<&'static [&'static str]> {
    CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(category))
        .map(|c| c.activities)
}
