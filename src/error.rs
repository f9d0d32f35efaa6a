use thiserror::Error;

/// Reasons a [`MeterRange`](crate::MeterRange) cannot produce finite mappings.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("range endpoints must be finite")]
    NonFinite,
    #[error("value range is empty in signed-log space")]
    EmptyValueSpan,
    #[error("pixel range is empty")]
    EmptyPixelSpan,
}
