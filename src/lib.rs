#![no_std]

pub mod device_role;
pub use device_role::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod button_click;
pub use button_click::*;

pub mod connection_state;
pub use connection_state::*;

pub mod services;

pub mod utils;
pub use utils::*;

/// Sample rate the client requests when none was configured (in Hz).
///
pub const DEFAULT_MPU_RATE: u8 = 100;

/// Lowest sample rate the firmware accepts (in Hz).
///
pub const MIN_MPU_RATE: u8 = 1;

/// Highest sample rate the firmware accepts (in Hz).
///
pub const MAX_MPU_RATE: u8 = 200;

/// Battery level poll interval the client starts with (in milliseconds).
///
pub const DEFAULT_BATTERY_POLL_MS: u32 = 5000;

/// Lowest battery level poll interval the client allows (in milliseconds).
///
pub const MIN_BATTERY_POLL_MS: u32 = 1000;
