//! The fixed catalog of hue families.
//!
//! Eighteen hues, 20° apart starting at 5°. Questions, records and maps are
//! always keyed by one of these angles.

use serde::Serialize;

/// One hue family of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HueDefinition {
    /// Hue angle in degrees
    pub angle: f64,
    /// Stable ASCII identifier
    pub id: &'static str,
    /// English display name
    #[serde(rename = "nameEN")]
    pub name_en: &'static str,
    /// Traditional Chinese display name, also the suffix of seeded names
    #[serde(rename = "nameZH")]
    pub name_zh: &'static str,
}

const fn hue(
    angle: f64,
    id: &'static str,
    name_en: &'static str,
    name_zh: &'static str,
) -> HueDefinition {
    HueDefinition {
        angle,
        id,
        name_en,
        name_zh,
    }
}

/// All hue families, ordered by angle.
pub static HUES: [HueDefinition; 18] = [
    hue(5.0, "rose", "Rose", "玫瑰"),
    hue(25.0, "red", "Red", "紅"),
    hue(45.0, "pumpkin", "Pumpkin", "柿"),
    hue(65.0, "orange", "Orange", "橘"),
    hue(85.0, "gold", "Gold", "金"),
    hue(105.0, "yellow", "Yellow", "黃"),
    hue(125.0, "lime", "Lime", "檸"),
    hue(145.0, "green", "Green", "綠"),
    hue(165.0, "mint", "Mint", "薄荷"),
    hue(185.0, "teal", "Teal", "湖水"),
    hue(205.0, "cyan", "Cyan", "青"),
    hue(225.0, "sky", "Sky", "天藍"),
    hue(245.0, "blue", "Blue", "藍"),
    hue(265.0, "sapphire", "Sapphire", "寶藍"),
    hue(285.0, "indigo", "Indigo", "靛"),
    hue(305.0, "purple", "Purple", "紫"),
    hue(325.0, "magenta", "Magenta", "洋紅"),
    hue(345.0, "pink", "Pink", "桃"),
];

/// Look up a catalog hue by its exact angle.
pub fn find_hue(angle: f64) -> Option<&'static HueDefinition> {
    HUES.iter().find(|hue| hue.angle == angle)
}

/// Look up a catalog hue by its identifier (case-sensitive).
pub fn find_hue_by_id(id: &str) -> Option<&'static HueDefinition> {
    HUES.iter().find(|hue| hue.id == id)
}
