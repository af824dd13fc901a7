use super::*;

/// An 8-bit-per-channel color, the usual payload of material color properties
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct ColorRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks 0xRRGGBBAA
    pub fn from_u32(u: u32) -> Self {
        Self::new((u >> 24) as u8, (u >> 16) as u8, (u >> 8) as u8, u as u8)
    }

    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 24)
            | (u32::from(self.g) << 16)
            | (u32::from(self.b) << 8)
            | u32::from(self.a)
    }

    /// Channels scaled to 0.0..=1.0, the form shaders want
    pub fn to_vector(self) -> cgmath::Vector4<f32> {
        cgmath::Vector4::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        )
    }
}

impl PropertyType for ColorRgba {
    fn name_fragment(&self) -> Option<String> {
        Some(format!("{:08X}", self.to_u32()))
    }
}
