use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Hex accent colours → Color32
// ---------------------------------------------------------------------------

/// Fallback when a chart carries an unparseable colour.
const FALLBACK: Color32 = Color32::LIGHT_BLUE;

/// Parse a `#rrggbb` (or `#rgb`) accent colour for egui.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb: Srgb<u8> = hex.trim().parse().ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Like [`parse_hex`], logging and substituting a default on failure.
pub fn accent(hex: &str) -> Color32 {
    parse_hex(hex).unwrap_or_else(|| {
        log::warn!("Invalid chart colour '{hex}', using fallback");
        FALLBACK
    })
}
