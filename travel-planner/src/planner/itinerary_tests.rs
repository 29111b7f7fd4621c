//! Unit tests for itinerary generation.

use std::num::NonZeroU32;

use super::*;
use crate::domain::fixtures::destination;

fn stay(days: u32) -> NonZeroU32 {
    NonZeroU32::new(days).unwrap()
}

fn make_destination(id: &str, stay_days: u32, daily_cost: f64, activities: &[&str]) -> Destination {
    let mut d = destination(id);
    d.name = id.to_uppercase();
    d.average_stay_days = stay(stay_days);
    d.average_daily_cost = daily_cost;
    d.activities = activities.iter().map(|a| a.to_string()).collect();
    d
}

fn make_catalog(destinations: Vec<Destination>) -> Catalog {
    Catalog::new(destinations).unwrap()
}

fn build(catalog: &Catalog, request: &ItineraryRequest) -> Itinerary {
    build_itinerary(catalog, &PlannerConfig::default(), request).unwrap()
}

fn day_destinations(itinerary: &Itinerary) -> Vec<&str> {
    itinerary
        .days
        .iter()
        .map(|d| d.destination.as_str())
        .collect()
}

#[test]
fn single_destination_five_days() {
    let catalog = make_catalog(vec![make_destination(
        "a",
        3,
        100.0,
        &["hike", "eat", "swim"],
    )]);
    let request = ItineraryRequest::new(["a"], 5).with_pace(Pace::Moderate);

    let itinerary = build(&catalog, &request);

    assert_eq!(itinerary.days.len(), 5);
    assert_eq!(itinerary.total_cost, 500.0);
    for (i, day) in itinerary.days.iter().enumerate() {
        assert_eq!(day.day, i as u32 + 1);
        assert_eq!(day.destination, "a");
        assert_eq!(day.total_cost, 100.0);

        let names: Vec<_> = day.activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["hike", "eat", "swim"]);
    }
}

#[test]
fn activities_cycle_within_a_day() {
    let catalog = make_catalog(vec![make_destination("a", 3, 100.0, &["hike", "eat", "swim"])]);
    let request = ItineraryRequest::new(["a"], 1).with_pace(Pace::Packed);

    let itinerary = build(&catalog, &request);

    let names: Vec<_> = itinerary.days[0]
        .activities
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["hike", "eat", "swim", "hike"]);
}

#[test]
fn single_activity_repeats() {
    let catalog = make_catalog(vec![make_destination("a", 1, 80.0, &["nap"])]);
    let request = ItineraryRequest::new(["a"], 2).with_pace(Pace::Moderate);

    let itinerary = build(&catalog, &request);

    for day in &itinerary.days {
        assert_eq!(day.activities.len(), 3);
        assert!(day.activities.iter().all(|a| a.name == "nap"));
    }
}

#[test]
fn advance_after_stay_length() {
    let catalog = make_catalog(vec![
        make_destination("a", 2, 100.0, &["x"]),
        make_destination("b", 5, 200.0, &["y"]),
    ]);
    let request = ItineraryRequest::new(["a", "b"], 4);

    let itinerary = build(&catalog, &request);

    assert_eq!(day_destinations(&itinerary), vec!["a", "a", "b", "b"]);
    assert_eq!(itinerary.total_cost, 600.0);
}

#[test]
fn last_destination_repeats_when_duration_exceeds_stays() {
    let catalog = make_catalog(vec![
        make_destination("a", 1, 100.0, &["x"]),
        make_destination("b", 1, 50.0, &["y"]),
    ]);
    let request = ItineraryRequest::new(["a", "b"], 6);

    let itinerary = build(&catalog, &request);

    assert_eq!(
        day_destinations(&itinerary),
        vec!["a", "b", "b", "b", "b", "b"]
    );
    assert_eq!(itinerary.total_cost, 100.0 + 5.0 * 50.0);
}

#[test]
fn advance_uses_absolute_day_number() {
    // b has a stay of 3, but day 3 is a multiple of 3 after only one day there
    let catalog = make_catalog(vec![
        make_destination("a", 2, 10.0, &["x"]),
        make_destination("b", 3, 20.0, &["y"]),
        make_destination("c", 4, 30.0, &["z"]),
    ]);
    let request = ItineraryRequest::new(["a", "b", "c"], 5);

    let itinerary = build(&catalog, &request);

    assert_eq!(day_destinations(&itinerary), vec!["a", "a", "b", "c", "c"]);
}

#[test]
fn unknown_ids_are_skipped() {
    let catalog = make_catalog(vec![
        make_destination("a", 1, 10.0, &["x"]),
        make_destination("b", 1, 20.0, &["y"]),
    ]);
    let request = ItineraryRequest::new(["nope", "b", "missing", "a"], 3);

    let itinerary = build(&catalog, &request);

    assert_eq!(itinerary.destinations, vec!["b", "a"]);
    assert_eq!(day_destinations(&itinerary), vec!["b", "a", "a"]);
}

#[test]
fn no_valid_destinations() {
    let catalog = make_catalog(vec![make_destination("a", 1, 10.0, &["x"])]);
    let config = PlannerConfig::default();

    let empty: [&str; 0] = [];
    let result = build_itinerary(&catalog, &config, &ItineraryRequest::new(empty, 3));
    assert_eq!(result, Err(ItineraryError::NoValidDestinations));

    let result = build_itinerary(&catalog, &config, &ItineraryRequest::new(["x", "y"], 3));
    assert_eq!(result, Err(ItineraryError::NoValidDestinations));
}

#[test]
fn zero_duration_is_empty() {
    let catalog = make_catalog(vec![make_destination("a", 1, 10.0, &["x"])]);
    let itinerary = build(&catalog, &ItineraryRequest::new(["a"], 0));

    assert!(itinerary.days.is_empty());
    assert_eq!(itinerary.total_cost, 0.0);
    assert_eq!(itinerary.destinations, vec!["a"]);
}

#[test]
fn pace_sets_count_and_hours() {
    let catalog = make_catalog(vec![make_destination("a", 9, 100.0, &["x", "y"])]);

    for (pace, count, hours) in [
        (Pace::Relaxed, 2, 4),
        (Pace::Moderate, 3, 3),
        (Pace::Packed, 4, 2),
    ] {
        let itinerary = build(&catalog, &ItineraryRequest::new(["a"], 1).with_pace(pace));
        let activities = &itinerary.days[0].activities;
        assert_eq!(activities.len(), count);
        assert!(activities.iter().all(|a| a.duration_hours == hours));
    }
}

#[test]
fn time_of_day_by_position() {
    let catalog = make_catalog(vec![make_destination("a", 9, 100.0, &["x"])]);
    let itinerary = build(&catalog, &ItineraryRequest::new(["a"], 1).with_pace(Pace::Packed));

    let slots: Vec<_> = itinerary.days[0]
        .activities
        .iter()
        .map(|a| a.time_of_day)
        .collect();
    assert_eq!(
        slots,
        vec![
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Evening,
            TimeOfDay::Evening
        ]
    );
}

#[test]
fn activity_cost_is_rounded_share_of_daily_cost() {
    let catalog = make_catalog(vec![make_destination("a", 9, 55.0, &["x"])]);
    let itinerary = build(&catalog, &ItineraryRequest::new(["a"], 2));

    for day in &itinerary.days {
        assert!(day.activities.iter().all(|a| a.cost == 17.0));
        // Activity costs are not summed into the day total
        assert_eq!(day.total_cost, 55.0);
    }
}

#[test]
fn only_first_day_has_note() {
    let catalog = make_catalog(vec![make_destination("a", 9, 100.0, &["x"])]);
    let itinerary = build(&catalog, &ItineraryRequest::new(["a"], 3));

    assert_eq!(
        itinerary.days[0].notes.as_deref(),
        Some(PlannerConfig::default().arrival_note.as_str())
    );
    assert!(itinerary.days[1..].iter().all(|d| d.notes.is_none()));
}

#[test]
fn start_date_stamps_each_day() {
    let catalog = make_catalog(vec![make_destination("a", 9, 100.0, &["x"])]);
    let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    let itinerary = build(
        &catalog,
        &ItineraryRequest::new(["a"], 3).with_start_date(start),
    );

    let dates: Vec<_> = itinerary.days.iter().map(|d| d.date.unwrap()).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ]
    );
}

#[test]
fn preferences_are_carried_through() {
    let catalog = make_catalog(vec![make_destination("a", 9, 100.0, &["x"])]);
    let request = ItineraryRequest::new(["a"], 2)
        .with_pace(Pace::Relaxed)
        .with_interests(["food", "history"])
        .with_budget_per_day(150.0);

    let itinerary = build(&catalog, &request);

    assert_eq!(itinerary.preferences.pace, Pace::Relaxed);
    assert_eq!(itinerary.preferences.interests, vec!["food", "history"]);
    assert_eq!(itinerary.preferences.budget_per_day, Some(150.0));
    assert!(itinerary.days.iter().all(|d| d.date.is_none()));
}

#[test]
fn interests_do_not_change_the_plan() {
    let catalog = make_catalog(vec![
        make_destination("a", 2, 100.0, &["x", "y"]),
        make_destination("b", 2, 70.0, &["z"]),
    ]);
    let plain = build(&catalog, &ItineraryRequest::new(["a", "b"], 4));
    let with_interests = build(
        &catalog,
        &ItineraryRequest::new(["a", "b"], 4).with_interests(["beaches"]),
    );

    assert_eq!(plain.days, with_interests.days);
    assert_eq!(plain.total_cost, with_interests.total_cost);
}

#[test]
fn title_lists_resolved_destinations() {
    let catalog = make_catalog(vec![
        make_destination("a", 2, 100.0, &["x"]),
        make_destination("b", 2, 70.0, &["z"]),
    ]);
    let itinerary = build(&catalog, &ItineraryRequest::new(["a", "zzz", "b"], 4));

    assert_eq!(itinerary.title, "4-Day Trip: A → B");
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec((1u32..6, 1u32..500, 1usize..5), 1..5).prop_map(|specs| {
            let destinations = specs
                .into_iter()
                .enumerate()
                .map(|(i, (stay_days, cost, n_activities))| {
                    let activities: Vec<String> =
                        (0..n_activities).map(|k| format!("act{k}")).collect();
                    let mut d = destination(&format!("d{i}"));
                    d.average_stay_days = stay(stay_days);
                    d.average_daily_cost = f64::from(cost);
                    d.activities = activities;
                    d
                })
                .collect();
            Catalog::new(destinations).unwrap()
        })
    }

    fn arb_pace() -> impl Strategy<Value = Pace> {
        prop::sample::select(vec![Pace::Relaxed, Pace::Moderate, Pace::Packed])
    }

    proptest! {
        /// Day count, day cost and total follow the flat daily-cost model
        #[test]
        fn costs_follow_daily_rate(catalog in arb_catalog(), duration in 0u32..30, pace in arb_pace()) {
            let ids: Vec<String> = catalog.iter().map(|d| d.id.clone()).collect();
            let itinerary = build(&catalog, &ItineraryRequest::new(ids, duration).with_pace(pace));

            prop_assert_eq!(itinerary.days.len(), duration as usize);
            let mut total = 0.0;
            for day in &itinerary.days {
                let d = catalog.get_by_id(&day.destination).unwrap();
                prop_assert_eq!(day.total_cost, d.average_daily_cost);
                prop_assert_eq!(day.activities.len(), pace.activities_per_day());
                for (i, a) in day.activities.iter().enumerate() {
                    prop_assert_eq!(&a.name, &d.activities[i % d.activities.len()]);
                    prop_assert_eq!(a.cost, (d.average_daily_cost * 0.3).round());
                    prop_assert_eq!(a.time_of_day, TimeOfDay::for_slot(i));
                }
                total += day.total_cost;
            }
            prop_assert_eq!(itinerary.total_cost, total);
        }

        /// Destinations are visited in request order without going back
        #[test]
        fn visits_are_in_order(catalog in arb_catalog(), duration in 0u32..30) {
            let ids: Vec<String> = catalog.iter().map(|d| d.id.clone()).collect();
            let itinerary = build(&catalog, &ItineraryRequest::new(ids.clone(), duration));

            let positions: Vec<usize> = itinerary
                .days
                .iter()
                .map(|day| ids.iter().position(|id| *id == day.destination).unwrap())
                .collect();
            for pair in positions.windows(2) {
                prop_assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
            }
        }

        /// The builder is deterministic
        #[test]
        fn deterministic(catalog in arb_catalog(), duration in 0u32..20, pace in arb_pace()) {
            let ids: Vec<String> = catalog.iter().map(|d| d.id.clone()).collect();
            let request = ItineraryRequest::new(ids, duration).with_pace(pace);
            prop_assert_eq!(build(&catalog, &request), build(&catalog, &request));
        }
    }
}
