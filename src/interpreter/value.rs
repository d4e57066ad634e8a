/// Runtime value representation.
///
/// Defines the `Value` type produced by evaluation, its kind tag used in
/// diagnostics, and its textual rendering.
pub mod core;
