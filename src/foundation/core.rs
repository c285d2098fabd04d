use crate::foundation::math::mul_div255_u8;

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the label fill.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Fully opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert into premultiplied RGBA8.
    pub fn premultiply(self) -> Rgba8Premul {
        let a = u16::from(self.a);
        Rgba8Premul {
            r: mul_div255_u8(u16::from(self.r), a),
            g: mul_div255_u8(u16::from(self.g), a),
            b: mul_div255_u8(u16::from(self.b), a),
            a: self.a,
        }
    }
}

/// Premultiplied RGBA8, the in-memory pixel layout of a canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Read a pixel from the first four bytes of an RGBA slice. `px` must hold at least four.
    pub(crate) fn from_slice(px: &[u8]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert back into straight alpha. Opaque pixels pass through unchanged.
    pub fn unpremultiply(self) -> Rgba8 {
        match self.a {
            0 => Rgba8::default(),
            255 => Rgba8::opaque(self.r, self.g, self.b),
            a => {
                let unpremul = |c: u8| -> u8 {
                    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
                    v.min(255) as u8
                };
                Rgba8 {
                    r: unpremul(self.r),
                    g: unpremul(self.g),
                    b: unpremul(self.b),
                    a,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
