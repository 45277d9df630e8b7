// Simple color struct, created from an unsigned 32 representing RRGGBB
// Particles pick from the fixed palette below; connection lines reuse
// palette entries with a per-draw alpha.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const CYAN: Color = Color::from_u32(0x00ffff);
pub const MAGENTA: Color = Color::from_u32(0xff00ff);
pub const YELLOW: Color = Color::from_u32(0xffff00);
pub const RED: Color = Color::from_u32(0xff0000);
pub const GREEN: Color = Color::from_u32(0x00ff00);
pub const BLUE: Color = Color::from_u32(0x0000ff);

pub const PALETTE: [Color; 6] = [CYAN, MAGENTA, YELLOW, RED, GREEN, BLUE];

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    // CSS color strings for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_unpacks_channels() {
        let c = Color::from_u32(0x12abef);
        assert_eq!(c.r, 0x12);
        assert_eq!(c.g, 0xab);
        assert_eq!(c.b, 0xef);
    }

    #[test]
    fn css_strings() {
        assert_eq!(CYAN.to_css(), "rgb(0, 255, 255)");
        assert_eq!(YELLOW.to_css_with_alpha(0.5), "rgba(255, 255, 0, 0.5)");
    }
}
