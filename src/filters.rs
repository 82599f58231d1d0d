//! Predicates over close approaches, used by [`NeoDatabase::query`].
//!
//! [`NeoDatabase::query`]: crate::database::NeoDatabase::query

use crate::database::ApproachView;
use chrono::NaiveDate;

/// A test applied to each close approach (and its NEO) during a query.
pub trait Filter {
    fn matches(&self, view: &ApproachView<'_>) -> bool;
}

impl<T: Filter + ?Sized> Filter for Box<T> {
    fn matches(&self, view: &ApproachView<'_>) -> bool {
        (**self).matches(view)
    }
}

impl<T: Filter + ?Sized> Filter for &T {
    fn matches(&self, view: &ApproachView<'_>) -> bool {
        (**self).matches(view)
    }
}

/// Adapts a closure into a [`Filter`].
///
/// ```
/// use neo_explorer::filters::FnFilter;
///
/// let close = FnFilter::new(|view| view.approach.distance < 0.05);
/// # let _ = close;
/// ```
pub struct FnFilter<F>(F);

impl<F> FnFilter<F> {
    pub fn new(predicate: F) -> Self
    where
        F: Fn(&ApproachView<'_>) -> bool,
    {
        FnFilter(predicate)
    }
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&ApproachView<'_>) -> bool,
{
    fn matches(&self, view: &ApproachView<'_>) -> bool {
        (self.0)(view)
    }
}

/// The built-in close-approach filters.
///
/// Date bounds are inclusive and compare the calendar date of the approach.
/// Filters on NEO attributes never match an unlinked approach, and the
/// diameter filters never match a NEO whose diameter is unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApproachFilter {
    Date(NaiveDate),
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    DistanceMin(f64),
    DistanceMax(f64),
    VelocityMin(f64),
    VelocityMax(f64),
    DiameterMin(f64),
    DiameterMax(f64),
    Hazardous(bool),
}

impl Filter for ApproachFilter {
    fn matches(&self, view: &ApproachView<'_>) -> bool {
        let approach = view.approach;
        let date = approach.time.date();
        match *self {
            ApproachFilter::Date(d) => date == d,
            ApproachFilter::StartDate(d) => date >= d,
            ApproachFilter::EndDate(d) => date <= d,
            ApproachFilter::DistanceMin(v) => approach.distance >= v,
            ApproachFilter::DistanceMax(v) => approach.distance <= v,
            ApproachFilter::VelocityMin(v) => approach.velocity >= v,
            ApproachFilter::VelocityMax(v) => approach.velocity <= v,
            ApproachFilter::DiameterMin(v) => view
                .neo
                .and_then(|neo| neo.diameter_km())
                .is_some_and(|d| d >= v),
            ApproachFilter::DiameterMax(v) => view
                .neo
                .and_then(|neo| neo.diameter_km())
                .is_some_and(|d| d <= v),
            ApproachFilter::Hazardous(h) => view.neo.is_some_and(|neo| neo.hazardous == h),
        }
    }
}

/// User-supplied query bounds. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCriteria {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

/// Turns the supplied criteria into filters; absent criteria add nothing.
pub fn create_filters(criteria: &QueryCriteria) -> Vec<ApproachFilter> {
    let candidates = [
        criteria.date.map(ApproachFilter::Date),
        criteria.start_date.map(ApproachFilter::StartDate),
        criteria.end_date.map(ApproachFilter::EndDate),
        criteria.distance_min.map(ApproachFilter::DistanceMin),
        criteria.distance_max.map(ApproachFilter::DistanceMax),
        criteria.velocity_min.map(ApproachFilter::VelocityMin),
        criteria.velocity_max.map(ApproachFilter::VelocityMax),
        criteria.diameter_min.map(ApproachFilter::DiameterMin),
        criteria.diameter_max.map(ApproachFilter::DiameterMax),
        criteria.hazardous.map(ApproachFilter::Hazardous),
    ];
    candidates.into_iter().flatten().collect()
}

/// Yields at most `n` items from `iter`, lazily. `None` or `Some(0)` means no limit.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> impl Iterator<Item = I::Item> {
    let n = match n {
        Some(0) | None => usize::MAX,
        Some(n) => n,
    };
    iter.take(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::NeoDatabase;
    use crate::helpers::cd_to_datetime;
    use crate::models::{CloseApproach, DIAMETER_UNKNOWN, NearEarthObject};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_db() -> NeoDatabase {
        let neos = vec![
            NearEarthObject::new("433", Some(String::from("Eros")), 16.84, false),
            NearEarthObject::new("2019 AA", None, DIAMETER_UNKNOWN, true),
        ];
        let approaches = vec![
            CloseApproach::new("433", cd_to_datetime("2020-01-01 06:00").unwrap(), 0.15, 5.0),
            CloseApproach::new("2019 AA", cd_to_datetime("2020-01-02 23:59").unwrap(), 0.01, 20.0),
            CloseApproach::new("9999", cd_to_datetime("2020-01-03 00:00").unwrap(), 0.30, 8.0),
        ];
        NeoDatabase::new(neos, approaches)
    }

    fn designations(db: &NeoDatabase, filters: &[ApproachFilter]) -> Vec<String> {
        designations_with(db, filters)
    }

    fn designations_with<F: Filter>(db: &NeoDatabase, filters: &[F]) -> Vec<String> {
        db.query(filters).map(|v| v.designation().to_string()).collect()
    }

    #[test]
    fn test_date_filters_are_inclusive() {
        let db = sample_db();
        assert_eq!(designations(&db, &[ApproachFilter::Date(ymd(2020, 1, 2))]), ["2019 AA"]);
        assert_eq!(
            designations(
                &db,
                &[
                    ApproachFilter::StartDate(ymd(2020, 1, 1)),
                    ApproachFilter::EndDate(ymd(2020, 1, 2))
                ]
            ),
            ["433", "2019 AA"]
        );
    }

    #[test]
    fn test_distance_and_velocity_bounds() {
        let db = sample_db();
        assert_eq!(designations(&db, &[ApproachFilter::DistanceMax(0.15)]), ["433", "2019 AA"]);
        assert_eq!(designations(&db, &[ApproachFilter::DistanceMin(0.2)]), ["9999"]);
        assert_eq!(
            designations(
                &db,
                &[ApproachFilter::VelocityMin(6.0), ApproachFilter::VelocityMax(10.0)]
            ),
            ["9999"]
        );
    }

    #[test]
    fn test_diameter_filters_skip_unknown_and_unlinked() {
        let db = sample_db();
        assert_eq!(designations(&db, &[ApproachFilter::DiameterMin(0.0)]), ["433"]);
        assert_eq!(designations(&db, &[ApproachFilter::DiameterMax(100.0)]), ["433"]);
    }

    #[test]
    fn test_hazardous_filter() {
        let db = sample_db();
        assert_eq!(designations(&db, &[ApproachFilter::Hazardous(true)]), ["2019 AA"]);
        assert_eq!(designations(&db, &[ApproachFilter::Hazardous(false)]), ["433"]);
    }

    #[test]
    fn test_boxed_filters() {
        let db = sample_db();
        let filters: Vec<Box<dyn Filter>> = vec![Box::new(ApproachFilter::Hazardous(true))];
        assert_eq!(db.query(&filters).count(), 1);
    }

    #[test]
    fn test_closure_filters() {
        let db = sample_db();
        let filters = [
            FnFilter::new(|view: &ApproachView<'_>| view.approach.distance < 0.2),
        ];
        assert_eq!(designations_with(&db, &filters), ["433", "2019 AA"]);

        let named_only = FnFilter::new(|view| view.neo.is_some_and(|neo| neo.name.is_some()));
        let mixed: Vec<Box<dyn Filter>> = vec![
            Box::new(named_only),
            Box::new(ApproachFilter::VelocityMax(10.0)),
        ];
        assert_eq!(designations_with(&db, &mixed), ["433"]);
    }

    #[test]
    fn test_create_filters_only_supplied_criteria() {
        assert!(create_filters(&QueryCriteria::default()).is_empty());

        let criteria = QueryCriteria {
            start_date: Some(ymd(2020, 1, 1)),
            velocity_max: Some(10.0),
            hazardous: Some(false),
            ..Default::default()
        };
        assert_eq!(
            create_filters(&criteria),
            vec![
                ApproachFilter::StartDate(ymd(2020, 1, 1)),
                ApproachFilter::VelocityMax(10.0),
                ApproachFilter::Hazardous(false),
            ]
        );
    }

    #[test]
    fn test_limit() {
        assert_eq!(limit(1..=5, Some(2)).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(limit(1..=5, Some(0)).count(), 5);
        assert_eq!(limit(1..=5, None).count(), 5);
        assert_eq!(limit(1..=5, Some(10)).count(), 5);
    }
}
