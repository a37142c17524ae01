
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroScaleRange
{
    D250 = 0,
    D500 = 1,
    D1000 = 2,
    D2000 = 3,
}

impl GyroScaleRange {

    /// Looks up the scale range for a raw range code, i.e. the byte stored in the gyro
    /// range characteristic. Returns `None` for codes outside the four ranges the sensor
    /// supports.
    ///
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::D250),
            1 => Some(Self::D500),
            2 => Some(Self::D1000),
            3 => Some(Self::D2000),
            _ => {
                log::debug!("unknown gyro range code: {}", code);
                None
            }
        }
    }

    /// Byte written to the gyro range characteristic to select this range. The protocol
    /// carries the raw code, unshifted.
    ///
    pub fn as_wire_byte(&self) -> u8 {
        (*self) as u8
    }

    /// Full scale range of this setting (in deg/s).
    ///
    pub fn full_scale_dps(&self) -> u16 {
        match self {
            Self::D250 => 250,
            Self::D500 => 500,
            Self::D1000 => 1000,
            Self::D2000 => 2000,
        }
    }

    /// Gets the sensitivity scale factor for this scale range.
    /// (Note scale factor is in LSB / (deg/s)).
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::D250 => 131.0,
            Self::D500 => 65.5,
            Self::D1000 => 32.8,
            Self::D2000 => 16.4,
        }
    }
}

impl Default for GyroScaleRange {
    fn default() -> Self {
        // Power-on setting of the sensor.
        GyroScaleRange::D250
    }
}
