pub mod card;

pub use card::{price_text, property_card};
