//! Debug-trace hook around mutating operations.
//!
//! With the `trace` feature enabled, mutating calls print the handle's
//! state to stderr before and after the mutation. Compiled out entirely
//! by default; diagnostic only, not part of the functional contract.

#[cfg(feature = "trace")]
macro_rules! trace_state {
    ($phase:expr, $op:expr, $handle:expr) => {
        ::std::eprintln!("dbg({}): in {}(). {:?}", $phase, $op, $handle)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_state {
    ($phase:expr, $op:expr, $handle:expr) => {{
        let _ = &$handle;
    }};
}

pub(crate) use trace_state;
