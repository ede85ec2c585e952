//! Itinerary builders shared by the result pipeline tests.

use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::{Airport, AirportCode, Carrier, Itinerary, Leg, Price};

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn at(hhmm: &str) -> NaiveDateTime {
    date().and_time(NaiveTime::parse_from_str(hhmm, "%H:%M").unwrap())
}

fn airport(code: &str) -> Airport {
    Airport::new(AirportCode::parse(code).unwrap(), code)
}

fn leg(id: &str, from: &str, to: &str, departs: NaiveDateTime, duration: u32, stops: u32, airline: &str) -> Leg {
    let marketing_carriers = if airline.is_empty() {
        vec![]
    } else {
        vec![Carrier::new(1, airline)]
    };

    Leg {
        id: id.to_string(),
        origin: airport(from),
        destination: airport(to),
        duration_mins: duration,
        stop_count: stops,
        departure: departs,
        departure_offset: None,
        arrival: departs + Duration::minutes(i64::from(duration)),
        marketing_carriers,
        segments: vec![],
    }
}

/// Builder for test itineraries. Defaults: $100, 120 minutes, nonstop,
/// departing 10:00, flown by "Aerolineas Argentinas".
pub struct ItineraryBuilder {
    id: String,
    price: f64,
    duration: u32,
    stops: u32,
    departs: NaiveDateTime,
    airline: String,
    offset: Option<FixedOffset>,
    return_airline: Option<String>,
}

impl ItineraryBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            price: 100.0,
            duration: 120,
            stops: 0,
            departs: at("10:00"),
            airline: "Aerolineas Argentinas".to_string(),
            offset: None,
            return_airline: None,
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn duration(mut self, mins: u32) -> Self {
        self.duration = mins;
        self
    }

    pub fn stops(mut self, stops: u32) -> Self {
        self.stops = stops;
        self
    }

    pub fn departs(mut self, hhmm: &str) -> Self {
        self.departs = at(hhmm);
        self
    }

    pub fn departs_at(mut self, when: NaiveDateTime) -> Self {
        self.departs = when;
        self
    }

    /// Gives the outbound departure a UTC offset in whole hours.
    pub fn offset_hours(mut self, hours: i32) -> Self {
        self.offset = FixedOffset::east_opt(hours * 3600);
        self
    }

    pub fn airline(mut self, name: &str) -> Self {
        self.airline = name.to_string();
        self
    }

    /// Adds a return leg flown by the given airline.
    pub fn returning_with(mut self, name: &str) -> Self {
        self.return_airline = Some(name.to_string());
        self
    }

    pub fn build(self) -> Itinerary {
        let mut legs = vec![leg(
            &format!("{}-out", self.id),
            "EZE",
            "MAD",
            self.departs,
            self.duration,
            self.stops,
            &self.airline,
        )];
        legs[0].departure_offset = self.offset;
        if let Some(airline) = &self.return_airline {
            legs.push(leg(
                &format!("{}-back", self.id),
                "MAD",
                "EZE",
                self.departs + Duration::days(7),
                self.duration,
                self.stops,
                airline,
            ));
        }

        let price = Price::new(self.price, format!("${}", self.price)).unwrap();
        Itinerary::new(self.id, price, legs).unwrap()
    }
}

pub fn itinerary(id: &str) -> ItineraryBuilder {
    ItineraryBuilder::new(id)
}

pub fn ids<'a, I>(itineraries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Itinerary>,
{
    itineraries.into_iter().map(|i| i.id()).collect()
}
