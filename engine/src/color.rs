// Palette --------------------------------------------------------------------
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorName {
    Grey,
    Red,
    Orange,
    Yellow,
    Black,
    White
}


// RGBA Color -----------------------------------------------------------------
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Color {

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: r,
            g: g,
            b: b,
            a: a
        }
    }

    pub fn from_name(name: ColorName) -> Color {
        match name  {
            ColorName::Grey => Color::new(0x80, 0x80, 0x80, 0xff),
            ColorName::Red => Color::new(0xf2, 0x00, 0x00, 0xff),
            ColorName::Orange => Color::new(0xfd, 0x83, 0x1c, 0xff),
            ColorName::Yellow => Color::new(0xfd, 0xda, 0x31, 0xff),
            ColorName::Black => Color::new(0x00, 0x00, 0x00, 0xff),
            ColorName::White => Color::new(0xff, 0xff, 0xff, 0xff)
        }
    }

    /// Palette color lit with a shading intensity, `0` is black and `255`
    /// the unchanged base color. Alpha is kept.
    pub fn from_intensity(name: ColorName, intensity: u8) -> Color {
        Color::from_name(name).scale(intensity)
    }

    pub fn scale(&self, intensity: u8) -> Color {
        Color::new(
            scale_channel(self.r, intensity),
            scale_channel(self.g, intensity),
            scale_channel(self.b, intensity),
            self.a
        )
    }

    pub fn with_alpha(&self, a: u8) -> Color {
        Color::new(self.r, self.g, self.b, a)
    }

    pub fn into_f32(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0
        ]
    }

}


// Helpers --------------------------------------------------------------------
#[inline]
fn scale_channel(value: u8, intensity: u8) -> u8 {
    // Rounded integer division, never exceeds `value`
    ((u32::from(value) * u32::from(intensity) + 127) / 255) as u8
}

