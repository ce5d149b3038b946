use chrono::{DateTime, Duration, Utc};

use crate::types::arrival::TimedArrival;

/// Drops arrivals sooner than `minimum`, then keeps the first `max_results` in
/// feed order.
///
/// Filtering must run before truncation, otherwise a minimum that removes the
/// nearest arrivals would leave fewer than `max_results` valid ones behind.
/// Arrivals without a known time keep their position but never pass a minimum.
pub fn normalize_arrivals<T: TimedArrival>(
    arrivals: Vec<T>,
    minimum: Option<Duration>,
    max_results: usize,
    now: DateTime<Utc>,
) -> Vec<T> {
    arrivals
        .into_iter()
        .filter(|a| match minimum {
            Some(minimum) => a.time_until(now).is_some_and(|t| t >= minimum),
            None => true,
        })
        .take(max_results)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        services::cta_client::fixtures::{chicago, test_now},
        types::arrival::{BusArrival, TrainArrival},
    };

    use super::*;

    fn trains() -> Vec<TrainArrival> {
        [
            ("95th/Dan Ryan", chicago(21, 28, 20), "red"),
            ("Howard", chicago(21, 32, 3), "green"),
            ("Howard", chicago(21, 36, 3), "green"),
            ("95th/Dan Ryan", chicago(21, 40, 3), "green"),
        ]
        .into_iter()
        .map(|(direction, time, color)| TrainArrival {
            direction: direction.to_string(),
            time,
            route_color: color.to_string(),
        })
        .collect()
    }

    fn buses(countdowns: &[&str]) -> Vec<BusArrival> {
        countdowns
            .iter()
            .map(|c| BusArrival {
                route: "152".to_string(),
                direction: "Westbound".to_string(),
                arrival: c.to_string(),
            })
            .collect()
    }

    fn countdowns(arrivals: &[BusArrival]) -> Vec<&str> {
        arrivals.iter().map(|a| a.arrival.as_str()).collect()
    }

    #[test]
    fn trains_without_minimum_are_kept_in_order() {
        let arrivals = normalize_arrivals(trains(), None, 5, test_now());

        assert_eq!(arrivals, trains());
    }

    #[test]
    fn trains_are_filtered_before_truncation() {
        let arrivals =
            normalize_arrivals(trains(), Some(Duration::milliseconds(120_000)), 2, test_now());

        let times: Vec<_> = arrivals.iter().map(|a| a.time).collect();
        assert_eq!(times, vec![chicago(21, 32, 3), chicago(21, 36, 3)]);
    }

    #[test]
    fn truncation_applies_without_minimum() {
        let arrivals = normalize_arrivals(trains(), None, 2, test_now());

        assert_eq!(arrivals.len(), 2);
        assert_eq!(arrivals[0].time, chicago(21, 28, 20));
    }

    #[test]
    fn buses_without_minimum_are_unchanged() {
        let arrivals = normalize_arrivals(buses(&["3", "8", "15", "27"]), None, 5, test_now());

        assert_eq!(countdowns(&arrivals), vec!["3", "8", "15", "27"]);
    }

    #[test]
    fn buses_are_filtered_before_truncation() {
        let arrivals = normalize_arrivals(
            buses(&["3", "8", "15", "27"]),
            Some(Duration::milliseconds(240_000)),
            2,
            test_now(),
        );

        assert_eq!(countdowns(&arrivals), vec!["8", "15"]);
    }

    #[test]
    fn minimum_is_inclusive() {
        let arrivals = normalize_arrivals(
            buses(&["3", "4", "5"]),
            Some(Duration::minutes(4)),
            5,
            test_now(),
        );

        assert_eq!(countdowns(&arrivals), vec!["4", "5"]);
    }

    #[test]
    fn unknown_times_keep_position_and_fail_minimum() {
        let unfiltered = normalize_arrivals(buses(&["3", "DLY", "8"]), None, 5, test_now());
        assert_eq!(countdowns(&unfiltered), vec!["3", "DLY", "8"]);

        let filtered = normalize_arrivals(
            buses(&["DLY", "DUE", "6"]),
            Some(Duration::minutes(1)),
            5,
            test_now(),
        );
        assert_eq!(countdowns(&filtered), vec!["6"]);
    }

    #[test]
    fn out_of_range_countdown_is_dropped_by_minimum() {
        let arrivals = normalize_arrivals(
            buses(&["999999999999999", "8"]),
            Some(Duration::minutes(4)),
            5,
            test_now(),
        );
        assert_eq!(countdowns(&arrivals), vec!["8"]);

        let unfiltered = normalize_arrivals(buses(&["999999999999999", "8"]), None, 5, test_now());
        assert_eq!(countdowns(&unfiltered), vec!["999999999999999", "8"]);
    }

    #[test]
    fn zero_max_results_yields_nothing() {
        assert!(normalize_arrivals(trains(), None, 0, test_now()).is_empty());
    }

    #[test]
    fn normalizing_is_repeatable() {
        let minimum = Some(Duration::minutes(2));

        assert_eq!(
            normalize_arrivals(trains(), minimum, 3, test_now()),
            normalize_arrivals(trains(), minimum, 3, test_now())
        );
    }
}
