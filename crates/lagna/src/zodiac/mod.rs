pub mod catalog;
pub mod mapper;

pub use catalog::{sign_at, sign_by_name, Element, Quality, ZodiacSign, SIGN_WIDTH_DEG, ZODIAC_SIGNS};
pub use mapper::{map_to_sign, SignPosition};
