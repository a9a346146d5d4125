//! Keyword drivers: recurring complaint themes counted across an app's
//! reviews.

use storepulse_core::{Driver, Trend};

/// Tracked terms, in tie-break order.
pub const DRIVER_VOCABULARY: [&str; 7] =
    ["crash", "buffer", "slow", "ads", "stream", "update", "login"];

const MAX_DRIVERS: usize = 5;

/// A term mentioned in more reviews than this is `worsening`.
const WORSENING_ABOVE: usize = 2;

/// Counts, for each vocabulary term, how many of `clean_texts` contain it as
/// a case-insensitive substring.
///
/// Terms nobody mentions are dropped. The result holds at most five drivers
/// ordered by count descending, ties kept in vocabulary order.
#[must_use]
pub fn detect_drivers<'a, I>(clean_texts: I) -> Vec<Driver>
where
    I: IntoIterator<Item = &'a str>,
{
    let lowered: Vec<String> = clean_texts.into_iter().map(str::to_lowercase).collect();

    let mut counted: Vec<(&str, usize)> = DRIVER_VOCABULARY
        .iter()
        .map(|&term| (term, lowered.iter().filter(|t| t.contains(term)).count()))
        .filter(|&(_, count)| count > 0)
        .collect();

    // Stable sort keeps vocabulary order among equal counts.
    counted.sort_by(|a, b| b.1.cmp(&a.1));

    counted
        .into_iter()
        .take(MAX_DRIVERS)
        .map(|(term, count)| Driver {
            label: term.to_string(),
            trend: if count > WORSENING_ABOVE {
                Trend::Worsening
            } else {
                Trend::Steady
            },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(drivers: &[Driver]) -> Vec<&str> {
        drivers.iter().map(|d| d.label.as_str()).collect()
    }

    #[test]
    fn no_reviews_no_drivers() {
        assert!(detect_drivers(std::iter::empty()).is_empty());
    }

    #[test]
    fn unmentioned_terms_are_dropped() {
        let drivers = detect_drivers(["nice shows", "love it"]);
        assert!(drivers.is_empty());
    }

    #[test]
    fn counts_reviews_not_occurrences() {
        let drivers = detect_drivers(["crash crash crash", "fine"]);
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].count, 1);
        assert_eq!(drivers[0].trend, Trend::Steady);
    }

    #[test]
    fn matches_substrings_case_insensitively() {
        let drivers = detect_drivers(["Keeps CRASHING", "Buffering all day", "streaming lags"]);
        assert_eq!(labels(&drivers), vec!["crash", "buffer", "stream"]);
    }

    #[test]
    fn worsening_only_above_two() {
        let drivers = detect_drivers(["slow", "slow", "slow", "ads", "ads"]);
        assert_eq!(drivers[0].label, "slow");
        assert_eq!(drivers[0].trend, Trend::Worsening);
        assert_eq!(drivers[1].label, "ads");
        assert_eq!(drivers[1].trend, Trend::Steady);
    }

    #[test]
    fn ordered_by_count_then_vocabulary() {
        let texts = [
            "login fails",
            "login again",
            "update broke it",
            "crash",
            "update needed",
        ];
        let drivers = detect_drivers(texts);
        assert_eq!(labels(&drivers), vec!["update", "login", "crash"]);
    }

    #[test]
    fn at_most_five_and_trend_tracks_count() {
        let all = "crash buffer slow ads stream update login";
        let texts = vec![all; 4];
        let drivers = detect_drivers(texts.iter().copied().chain(["crash", "login"]));

        assert_eq!(drivers.len(), 5);
        assert_eq!(labels(&drivers), vec!["crash", "login", "buffer", "slow", "ads"]);
        for driver in &drivers {
            assert_eq!(driver.trend == Trend::Worsening, driver.count > 2);
        }
    }
}
