//! US Census regions and the state-abbreviation lookup used to filter rows.

use std::fmt;

/// One of the four US Census macro-regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Northeast,
    Midwest,
    South,
    West,
}

/// Region → member states. Each state code appears in exactly one region.
static REGION_STATES: &[(Region, &[&str])] = &[
    (
        Region::Northeast,
        &["ME", "NH", "VT", "MA", "RI", "CT", "NY", "NJ", "PA"],
    ),
    (
        Region::Midwest,
        &[
            "OH", "MI", "IN", "IL", "WI", "MN", "IA", "MO", "ND", "SD", "NE", "KS",
        ],
    ),
    (
        Region::South,
        &[
            "DE", "MD", "DC", "VA", "WV", "NC", "SC", "GA", "FL", "KY", "TN", "MS", "AL", "OK",
            "TX", "AR", "LA",
        ],
    ),
    (
        Region::West,
        &[
            "MT", "ID", "WY", "CO", "NM", "AZ", "UT", "NV", "WA", "OR", "CA", "AK", "HI",
        ],
    ),
];

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Northeast,
        Region::Midwest,
        Region::South,
        Region::West,
    ];

    /// State abbreviations belonging to this region.
    pub fn states(self) -> &'static [&'static str] {
        REGION_STATES
            .iter()
            .find(|(region, _)| *region == self)
            .map(|(_, states)| *states)
            .unwrap_or(&[])
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Northeast => "Northeast",
            Region::Midwest => "Midwest",
            Region::South => "South",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the census region for a state abbreviation.
///
/// Matching is exact: `"ca"` or `" CA"` are unmapped and return `None`.
pub fn region_for_state(state: &str) -> Option<Region> {
    REGION_STATES
        .iter()
        .find(|(_, states)| states.contains(&state))
        .map(|(region, _)| *region)
}

/// Row filter predicate. A missing state never matches.
pub fn in_region(state: Option<&str>, region: Region) -> bool {
    state.and_then(region_for_state) == Some(region)
}
