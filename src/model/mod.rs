//! Types that represent the core data model, such as `Expense` and `SavedSpot`.
mod expense;
mod itinerary;
mod spot;

pub use expense::{Expense, ExpenseCategory, PaymentMethod};
pub use itinerary::{
    Activity, DayOption, DayPlan, EmergencyContact, FlightInfo, FlightLeg, HotelInfo, Phrase,
    WeatherKind,
};
pub use spot::SavedSpot;
