use crate::{MAX_MPU_RATE, MIN_MPU_RATE};

/// Clamps a requested MPU sample rate to the range the firmware accepts,
/// [`MIN_MPU_RATE`] to [`MAX_MPU_RATE`] Hz.
///
#[inline]
pub fn clamp_mpu_rate(rate: i32) -> u8 {
    if rate < MIN_MPU_RATE as i32 {
        MIN_MPU_RATE
    } else if rate > MAX_MPU_RATE as i32 {
        MAX_MPU_RATE
    } else {
        rate as u8
    }
}
