
/// Functional role assigned to a VECS unit. The role is picked by the operator before a
/// session and decides whether the unit streams motion data automatically once connected.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceRole
{
    Undefined = 0,
    Doctor = 1,
    PatientHand = 2,
    PatientBack = 3,
}

impl DeviceRole {

    /// Looks up the role for a raw role code. Returns `None` for codes the protocol does
    /// not define, so callers pick their own fallback label.
    ///
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Undefined),
            1 => Some(Self::Doctor),
            2 => Some(Self::PatientHand),
            3 => Some(Self::PatientBack),
            _ => {
                log::debug!("unknown device role code: {}", code);
                None
            }
        }
    }

    /// Label shown for this role in the device list.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Doctor => "Doctor",
            Self::PatientHand => "Patient (on hand)",
            Self::PatientBack => "Patient (on back)",
        }
    }

    /// Byte written to the role characteristic to select this role.
    ///
    pub fn as_wire_byte(&self) -> u8 {
        (*self) as u8
    }

    /// Patient roles start streaming motion data as soon as the MPU service is discovered,
    /// the other roles wait for an explicit start.
    ///
    pub fn is_patient(&self) -> bool {
        matches!(self, Self::PatientHand | Self::PatientBack)
    }
}

impl Default for DeviceRole {
    fn default() -> Self {
        DeviceRole::Undefined
    }
}

impl core::fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
