use thiserror::Error;

/// Error types for `GrowVec` and `GrowStr` operations
///
/// Every error is reported before any mutation takes place: an `Err`
/// return leaves the buffer byte-for-byte unchanged.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BufferError {
    /// Position is beyond the current buffer length
    #[error("Index out of bounds: index {index} is beyond length {length}")]
    IndexOutOfBounds {
        /// Position that was accessed
        index: usize,
        /// Current length of the buffer
        length: usize,
    },
    /// Element range extends beyond the current buffer length
    #[error("Range out of bounds: [{start}, {start} + {count}) is beyond length {length}")]
    RangeOutOfBounds {
        /// First position of the range
        start: usize,
        /// Number of elements in the range
        count: usize,
        /// Current length of the buffer
        length: usize,
    },
    /// Element payload does not match the element size fixed at construction
    #[error("Element size mismatch: expected {expected} bytes per element, got {provided}")]
    ElementSizeMismatch {
        /// Element size the buffer was constructed with
        expected: usize,
        /// Byte length of the payload that was provided
        provided: usize,
    },
    /// Caller-provided output buffer is too small for the copied elements
    #[error("Output too small: required {required} bytes, but only {provided} bytes provided")]
    OutputTooSmall {
        /// Number of bytes the operation needs to copy out
        required: usize,
        /// Byte length of the buffer that was provided
        provided: usize,
    },
    /// Requested capacity exceeds the addressable element count
    #[error("Capacity overflow: requested {requested} elements, maximum is {max}")]
    CapacityOverflow {
        /// Capacity that was requested
        requested: usize,
        /// Largest capacity representable for this element size
        max: usize,
    },
    /// Invalid parameter provided at construction
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value that was provided
        value: usize,
    },
}
