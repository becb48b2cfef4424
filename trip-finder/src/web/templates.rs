//! Askama templates for the results page.

use askama::Template;
use chrono::DateTime;

use crate::output::TripRecord;

/// Results page: one table row per trip.
#[derive(Template)]
#[template(path = "trips.html")]
pub struct TripsTemplate {
    pub origin: String,
    pub trips: Vec<TripView>,
}

/// Trip view model for the results table.
#[derive(Debug, Clone)]
pub struct TripView {
    pub route: String,
    pub flights: usize,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub total_cost: String,
    pub stays: String,
}

impl TripView {
    /// Create from a trip record.
    pub fn from_record(record: &TripRecord) -> Self {
        let mut route: Vec<&str> = record.flights.iter().map(|f| f.origin.as_str()).collect();
        if let Some(last) = record.flights.last() {
            route.push(&last.destination);
        }

        let stays = record
            .stays
            .iter()
            .map(|s| format!("{} {}n", s.location, s.nights))
            .collect::<Vec<_>>()
            .join(", ");

        let currency = record
            .flights
            .first()
            .map(|f| f.currency.as_str())
            .unwrap_or_default();

        Self {
            route: route.join(" - "),
            flights: record.flights.len(),
            departure: format_timestamp(record.flights.first().map_or(0, |f| f.departure)),
            arrival: format_timestamp(record.flights.last().map_or(0, |f| f.arrival)),
            duration: format_duration(record.total_duration_seconds),
            total_cost: format!("{:.2} {currency}", record.total_cost),
            stays,
        }
    }
}

/// Render an epoch timestamp as a UTC date and time.
fn format_timestamp(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| seconds.to_string())
}

/// Render a duration compactly, largest unit first.
fn format_duration(seconds: i64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let mins = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{FlightRecord, StayRecord};

    const HOUR: i64 = 3_600;
    const NIGHT: i64 = 86_400;

    fn leg(origin: &str, destination: &str, departure: i64, arrival: i64) -> FlightRecord {
        FlightRecord {
            origin: origin.into(),
            destination: destination.into(),
            key: format!("FR-{origin}{destination}"),
            departure,
            arrival,
            cost: 25.0,
            currency: "EUR".into(),
        }
    }

    #[test]
    fn view_summarizes_trip() {
        let record = TripRecord {
            flights: vec![
                leg("BGY", "STN", 0, HOUR),
                leg("STN", "DUB", HOUR + NIGHT, 2 * HOUR + NIGHT),
                leg("DUB", "BGY", 2 * HOUR + 3 * NIGHT, 3 * HOUR + 3 * NIGHT),
            ],
            stays: vec![
                StayRecord {
                    location: "STN".into(),
                    seconds: NIGHT,
                    nights: 1,
                },
                StayRecord {
                    location: "DUB".into(),
                    seconds: 2 * NIGHT,
                    nights: 2,
                },
            ],
            total_cost: 75.0,
            total_duration_seconds: 3 * HOUR + 3 * NIGHT,
        };

        let view = TripView::from_record(&record);
        assert_eq!(view.route, "BGY - STN - DUB - BGY");
        assert_eq!(view.flights, 3);
        assert_eq!(view.departure, "1970-01-01 00:00");
        assert_eq!(view.total_cost, "75.00 EUR");
        assert_eq!(view.stays, "STN 1n, DUB 2n");
        assert_eq!(view.duration, "3d 3h");
    }

    #[test]
    fn duration_formats_by_magnitude() {
        assert_eq!(format_duration(45 * 60), "45m");
        assert_eq!(format_duration(5 * HOUR + 30 * 60), "5h 30m");
        assert_eq!(format_duration(2 * NIGHT + 5 * HOUR), "2d 5h");
    }
}
