//! Reply phrase templates consumed by the chat front end.
//!
//! Degrees are shown with one decimal, taken from the two-decimal value
//! carried in serialized results.

use crate::zodiac::SignPosition;

pub const ASCENDANT_PLACEHOLDER: &str = "การตีความลัคณาจะดึงจากฐานข้อมูลเมื่อมีการตั้งค่า";
pub const HOUSE_PLACEHOLDER: &str = "คำอธิบายบ้านจะดึงจากฐานข้อมูลเมื่อมีการตั้งค่า";
pub const ASCENDANT_UNAVAILABLE: &str = "ไม่สามารถคำนวณ Ascendant ได้";

pub fn house_unavailable(house_number: u8) -> String {
    format!("ไม่สามารถคำนวณบ้านที่ {house_number} ได้")
}

/// `<text> (องศา D.D° ในราศี<sign>) เป็นราศีธาตุ<element> และมีคุณภาพ<quality>`
pub fn ascendant_line(text: &str, position: &SignPosition) -> String {
    format!(
        "{text} (องศา {:.1}° ในราศี{}) เป็นราศีธาตุ{} และมีคุณภาพ{}",
        position.rounded_degree(),
        position.sign_name(),
        position.element(),
        position.quality()
    )
}

/// `บ้านที่ <N> (<meaning>): ราศี<sign> องศา D.D°`
pub fn house_line(house_number: u8, meaning: &str, position: &SignPosition) -> String {
    format!(
        "บ้านที่ {house_number} ({meaning}): ราศี{} องศา {:.1}°",
        position.sign_name(),
        position.rounded_degree()
    )
}
