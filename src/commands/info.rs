//! Handlers for `tabi itinerary` and `tabi info`.

use crate::args::ItineraryArgs;
use crate::commands::Out;
use crate::model::{DayPlan, EmergencyContact, FlightInfo, HotelInfo};
use crate::{trip, Result};
use serde::Serialize;
use std::fmt::Write as _;

/// Prints the day-by-day schedule for the chosen final-day option.
pub fn itinerary(args: &ItineraryArgs) -> Result<Out<Vec<DayPlan>>> {
    let days = trip::day_plans(args.option());
    let mut message = format!("{} ({})\n", trip::TRIP_TITLE, trip::TRIP_DATES);
    for day in &days {
        let _ = writeln!(
            message,
            "\n{} ({}) {} {}",
            day.date,
            day.weekday,
            day.weather.symbol(),
            day.weather_temp
        );
        for activity in &day.activities {
            let marker = if activity.highlight { "★" } else { " " };
            let _ = writeln!(
                message,
                "  {marker} {} {} - {}",
                activity.time, activity.title, activity.description
            );
            if let Some(note) = activity.reservation_note {
                let _ = writeln!(message, "      ⚠ {note}");
            }
        }
    }
    Ok(Out::new(message.trim_end().to_string(), days))
}

/// Everything `tabi info` prints, for the structured output.
#[derive(Debug, Clone, Serialize)]
pub struct TripInfo {
    pub title: &'static str,
    pub dates: &'static str,
    pub flights: Vec<FlightInfo>,
    pub hotels: Vec<HotelInfo>,
    pub emergency_contacts: Vec<EmergencyContact>,
}

/// Prints flights, hotels and emergency contacts.
pub fn info() -> Result<Out<TripInfo>> {
    let details = TripInfo {
        title: trip::TRIP_TITLE,
        dates: trip::TRIP_DATES,
        flights: trip::flights(),
        hotels: trip::hotels(),
        emergency_contacts: trip::emergency_contacts(),
    };
    let mut message = format!("{} ({})\n\nFlights:\n", details.title, details.dates);
    for flight in &details.flights {
        let _ = writeln!(
            message,
            "  {} {} {} {}",
            flight.leg.label(),
            flight.date,
            flight.code,
            flight.route
        );
    }
    message.push_str("\nHotels:\n");
    for hotel in &details.hotels {
        let _ = writeln!(message, "  {} {} ({})", hotel.dates, hotel.name, hotel.area);
    }
    message.push_str("\nEmergency contacts:\n");
    for contact in &details.emergency_contacts {
        let _ = writeln!(message, "  {}: {}", contact.name, contact.number);
    }
    Ok(Out::new(message.trim_end().to_string(), details))
}
