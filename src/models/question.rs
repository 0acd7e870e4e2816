use oklch_map::{
    shade_ramp, suggest_prefixes, to_display_hex, HexMode, HueDefinition, OklchColor, ShadeRamp,
};
use serde::Serialize;
use utoipa::ToSchema;

/// A color to be named, with everything a client needs to show it
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Hue family the color was drawn from
    #[schema(value_type = Object)]
    pub hue: HueDefinition,
    /// OKLCH coordinates `{l, c, h}`
    #[schema(value_type = Object)]
    pub color: OklchColor,
    /// Hex with each channel clamped, as sent to the moderator
    pub hex: String,
    /// Hex after reducing chroma onto the gamut boundary
    pub gamut_hex: String,
    /// CSS `oklch()` string
    pub css: String,
    /// Naming hints, nearest first
    pub prefixes: Vec<String>,
    #[schema(value_type = Object)]
    pub shades: ShadeRamp,
}

impl Question {
    pub fn new(hue: HueDefinition, color: OklchColor) -> Self {
        Self {
            hue,
            hex: to_display_hex(color.l, color.c, color.h, HexMode::Clip),
            gamut_hex: to_display_hex(color.l, color.c, color.h, HexMode::GamutMapped),
            css: color.to_css(),
            prefixes: suggest_prefixes(&color)
                .iter()
                .map(|p| p.to_string())
                .collect(),
            shades: shade_ramp(&color),
            color,
        }
    }
}
