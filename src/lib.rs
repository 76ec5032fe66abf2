//! stmv - Space-Time Motion Visualizer
//!
//! Core library behind the `stmv` binary: the special-relativity
//! calculator, the input validation boundary, the dilation clock
//! animation state, and the sweep/export/plot helpers. The interactive
//! terminal host lives in [`tui`].

pub mod clock;
pub mod metrics;
pub mod relativity;
pub mod tui;
