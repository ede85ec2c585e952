//! Sample Sky Scrapper payloads for tests.

use serde_json::{Value, json};

/// A one-way itinerary EZE -> MAD with a single segment.
pub(crate) fn itinerary(
    id: &str,
    price: f64,
    airline: &str,
    departure: &str,
    duration: u32,
    stops: u32,
) -> Value {
    json!({
        "id": id,
        "price": { "raw": price, "formatted": format!("${price}") },
        "legs": [{
            "id": format!("{id}-out"),
            "origin": {
                "id": "EZE",
                "entityId": "95673285",
                "name": "Buenos Aires Ministro Pistarini",
                "displayCode": "EZE",
                "city": "Buenos Aires",
                "country": "Argentina"
            },
            "destination": {
                "id": "MAD",
                "entityId": "95565077",
                "name": "Madrid Barajas",
                "displayCode": "MAD",
                "city": "Madrid",
                "country": "Spain"
            },
            "durationInMinutes": duration,
            "stopCount": stops,
            "departure": departure,
            "arrival": "2024-03-16T07:05:00",
            "carriers": {
                "marketing": [{
                    "id": -31915,
                    "logoUrl": "https://logos.skyscnr.com/images/airlines/favicon/LA.png",
                    "name": airline
                }]
            },
            "segments": [{
                "id": format!("{id}-seg"),
                "origin": { "flightPlaceId": "EZE", "displayCode": "EZE", "name": "Buenos Aires Ministro Pistarini" },
                "destination": { "flightPlaceId": "MAD", "displayCode": "MAD", "name": "Madrid Barajas" },
                "departure": departure,
                "arrival": "2024-03-16T07:05:00",
                "durationInMinutes": duration,
                "marketingCarrier": { "id": -31915, "name": airline, "logoUrl": "" },
                "operatingCarrier": { "id": -31915, "name": airline, "logoUrl": "" }
            }]
        }]
    })
}

/// A successful search response wrapping the given itineraries.
pub(crate) fn response(itineraries: Vec<Value>) -> Value {
    json!({
        "status": true,
        "message": "Successful",
        "timestamp": 1710460800000i64,
        "data": {
            "itineraries": itineraries,
            "filterStats": {
                "duration": { "min": 360, "max": 1440 },
                "stops": { "direct": 1, "one": 1, "twoormore": 0 }
            }
        }
    })
}
