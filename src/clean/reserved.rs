//! Windows reserved device names

const RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Check whether `stem` (a name without extension) is a reserved device name
pub fn is_windows_reserved(stem: &str) -> bool {
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(stem))
}
