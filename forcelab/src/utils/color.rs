use anyhow::anyhow;
use anyhow::Result;
use colors_transform::Color;
use colors_transform::Rgb;
use egui::Color32;
use glam::Vec4;

pub trait Vec4Color {
    fn new_rgb(r: u8, g: u8, b: u8, a: u8) -> Vec4;
    fn from_hex(hex: &str) -> Result<Vec4>;
    fn to_rgb(self) -> (u8, u8, u8, u8);
    fn to_color32(self) -> Color32;
}

pub trait RgbToVec4 {
    fn to_vec4(self) -> Vec4;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub f1: Vec4,
    pub f2: Vec4,
    pub resultant: Vec4,
    pub construction: Vec4,
    pub success: Vec4,
    pub failure: Vec4,
    pub rubber_band: Vec4,
    pub knot: Vec4,
    pub ink: Vec4,
    pub muted: Vec4,
    pub grid: Vec4,
    pub weight: Vec4,
    pub person: Vec4,
    pub handle_fill: Vec4,
    pub handle_stroke: Vec4,
}

impl Vec4Color for Vec4 {
    fn new_rgb(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
        Vec4::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    fn from_hex(hex: &str) -> Result<Vec4> {
        let rgb = Rgb::from_hex_str(hex.trim()).map_err(|err| anyhow!("Invalid color {} ({:?})", hex, err))?;
        Ok(rgb.to_vec4())
    }

    fn to_rgb(self) -> (u8, u8, u8, u8) {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.x), channel(self.y), channel(self.z), channel(self.w))
    }

    fn to_color32(self) -> Color32 {
        let (r, g, b, a) = self.to_rgb();
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

impl RgbToVec4 for Rgb {
    fn to_vec4(self) -> Vec4 {
        let (r, g, b) = self.as_tuple();
        Vec4::new(r / 255.0, g / 255.0, b / 255.0, 1.0)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            f1: Vec4::new_rgb(239, 68, 68, 255),
            f2: Vec4::new_rgb(59, 130, 246, 255),
            resultant: Vec4::new_rgb(168, 85, 247, 255),
            construction: Vec4::new_rgb(148, 163, 184, 255),
            success: Vec4::new_rgb(34, 197, 94, 255),
            failure: Vec4::new_rgb(239, 68, 68, 255),
            rubber_band: Vec4::new_rgb(245, 158, 11, 255),
            knot: Vec4::new_rgb(249, 115, 22, 255),
            ink: Vec4::new_rgb(51, 65, 85, 255),
            muted: Vec4::new_rgb(100, 116, 139, 255),
            grid: Vec4::new_rgb(226, 232, 240, 255),
            weight: Vec4::new_rgb(22, 163, 74, 255),
            person: Vec4::new_rgb(14, 165, 233, 255),
            handle_fill: Vec4::new_rgb(255, 255, 255, 255),
            handle_stroke: Vec4::new_rgb(203, 213, 225, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_match_rgb_constructor() {
        let parsed = Vec4::from_hex("#a855f7").unwrap_or_default();
        assert_eq!(parsed.to_rgb(), Vec4::new_rgb(168, 85, 247, 255).to_rgb());
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert!(Vec4::from_hex("#zzz").is_err());
    }

    #[test]
    fn conversion_to_egui_keeps_channels() {
        assert_eq!(Vec4::new_rgb(34, 197, 94, 255).to_color32(), Color32::from_rgb(34, 197, 94));
    }
}
