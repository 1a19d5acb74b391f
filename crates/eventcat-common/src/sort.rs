use crate::event::Event;

/// Closed set of list orderings the API recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriteria {
    /// Ascending by `start_date_time`.
    Date,
}

impl SortCriteria {
    /// Unrecognized values yield `None`; callers fall back to the unsorted
    /// list rather than rejecting the request.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

/// Stable sort, so ties keep their incoming order within one run.
pub fn sort_events(events: &mut [Event], criteria: SortCriteria) {
    match criteria {
        SortCriteria::Date => events.sort_by_key(|event| event.start_date_time),
    }
}
