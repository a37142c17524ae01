// 16-bit UUIDs of the vendor services and characteristics of a VECS unit. These are not
// part of the standard Bluetooth service list; the battery service uses the standard
// UUIDs and is not repeated here.

// Key (button) service.
pub const KEY_SERVICE: u16 = 0xffe0;
pub const CHAR_KEY_PRESS_STATE: u16 = 0xffe1; // notify: ButtonClick code
pub const CHAR_KEY_REQUEST: u16 = 0xffe2;     // write: blink delay

// MPU (motion processing unit) service.
pub const MPU_SERVICE: u16 = 0xfff0;
pub const CHAR_ACCEL_RANGE: u16 = 0xfff1; // write: AccelScaleRange code
pub const CHAR_GYRO_RANGE: u16 = 0xfff2;  // write: GyroScaleRange code
pub const CHAR_MPU_CONTROL: u16 = 0xfff3; // write: sample rate in Hz, 0 stops the MPU
pub const CHAR_MPU_DATA: u16 = 0xfff4;    // notify: raw sample packet
pub const CHAR_MPU_TEMP: u16 = 0xfff5;
