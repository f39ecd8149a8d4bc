//! Marker types.

/// Marker type describing a vehicle registration.
#[derive(Clone, Copy, Debug)]
pub struct Registration;
