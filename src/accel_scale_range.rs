
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelScaleRange
{
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelScaleRange {

    /// Looks up the scale range for a raw range code, i.e. the byte stored in the
    /// accelerometer range characteristic. Returns `None` for codes outside the four
    /// ranges the sensor supports.
    ///
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::G2),
            1 => Some(Self::G4),
            2 => Some(Self::G8),
            3 => Some(Self::G16),
            _ => {
                log::debug!("unknown accelerometer range code: {}", code);
                None
            }
        }
    }

    /// Byte written to the accelerometer range characteristic to select this range.
    ///
    pub fn as_wire_byte(&self) -> u8 {
        (*self) as u8
    }

    /// Full scale range of this setting (in g).
    ///
    pub fn full_scale_g(&self) -> u16 {
        // The four codes map onto powers of two: 2, 4, 8, 16.
        2u16 << ((*self) as u8)
    }

    /// Gets the sensitivity scale factor for this scale range.
    /// (Note scale factor is in LSB/g).
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }
}

impl Default for AccelScaleRange {
    fn default() -> Self {
        // Power-on setting of the sensor.
        AccelScaleRange::G2
    }
}

/// Full scale range (in g) that `index` selects on the accelerometer, computed as
/// 2^(index + 1). This keeps the raw pass-through arithmetic of the range table: no
/// bounds are checked, so e.g. `accel_full_scale_g(-1)` is 1.0. Use
/// [`AccelScaleRange::from_code`] when the index has to be one of the four codes the
/// sensor actually accepts.
///
pub fn accel_full_scale_g(index: i32) -> f32 {
    // The increment happens in f32 so the function stays total at i32::MAX.
    libm::powf(2.0, (index as f32) + 1.0)
}
