use std::ops;

/// Linear RGB triplet, one channel per component.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ColorRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ops::Add<ColorRgb> for ColorRgb {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: ColorRgb) -> Self::Output {
        ColorRgb {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl ops::AddAssign<ColorRgb> for ColorRgb {
    #[inline(always)]
    fn add_assign(&mut self, rhs: ColorRgb) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl ops::Sub<ColorRgb> for ColorRgb {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: ColorRgb) -> Self::Output {
        ColorRgb {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl ops::Mul<f64> for ColorRgb {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        ColorRgb {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl ops::Mul<ColorRgb> for ColorRgb {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: ColorRgb) -> Self::Output {
        ColorRgb {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl ops::Div<f64> for ColorRgb {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: f64) -> Self::Output {
        ColorRgb {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}

impl ColorRgb {
    #[inline(always)]
    pub fn new(r: f64, g: f64, b: f64) -> ColorRgb {
        ColorRgb { r, g, b }
    }

    #[inline(always)]
    pub fn black() -> ColorRgb {
        ColorRgb::new(0.0, 0.0, 0.0)
    }

    #[inline(always)]
    pub fn white() -> ColorRgb {
        ColorRgb::new(1.0, 1.0, 1.0)
    }

    /// Same value on every channel, used to visualize scalar terms.
    #[inline(always)]
    pub fn gray(value: f64) -> ColorRgb {
        ColorRgb::new(value, value, value)
    }

    /// Rescale so the largest channel is at most one. The whole color is
    /// divided by that channel, which keeps the hue instead of clipping it.
    pub fn max_to_one(self) -> ColorRgb {
        let max = self.r.max(self.g).max(self.b);
        if max > 1.0 {
            self / max
        } else {
            self
        }
    }
}
