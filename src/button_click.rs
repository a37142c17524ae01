
/// Click type reported by the key press characteristic.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClick
{
    Single = 1,
    Double = 2,
    Long = 3,
}

impl ButtonClick {

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Long),
            _ => {
                log::debug!("unknown button click code: {}", code);
                None
            }
        }
    }

    pub fn as_wire_byte(&self) -> u8 {
        (*self) as u8
    }

    /// Label shown for this click type next to the click counters.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single click",
            Self::Double => "Double click",
            Self::Long => "Long click",
        }
    }
}

impl core::fmt::Display for ButtonClick {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
