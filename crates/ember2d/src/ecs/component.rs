//! Component trait

/// Marker trait for components
///
/// Any plain `'static` data type can be attached to an entity; the blanket
/// implementation keeps component definitions free of boilerplate.
pub trait Component: 'static {}

impl<T: 'static> Component for T {}
