//! SR XYZ tristimulus waypoint
//!
//! Not CIE XYZ: the axes are the ones the SR LAB 2 model is fitted to,
//! with linear sRGB white landing at roughly (1, 1, 1).

/// SR XYZ color coordinates with alpha carried alongside
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Alpha, passed through unchanged by every stage
    pub alpha: f32,
}

impl Xyz {
    /// Create a new XYZ waypoint
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, alpha: f32) -> Self {
        Self { x, y, z, alpha }
    }

    /// Create XYZ from an array `[x, y, z, alpha]`
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to array `[x, y, z, alpha]`
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.alpha]
    }

    /// Check if approximately equal to another XYZ value
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.alpha - other.alpha).abs() < epsilon
    }
}

impl From<[f32; 4]> for Xyz {
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f32; 4] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}
