//! # Twine Flow Sizing
//!
//! Pipe and nozzle sizing models for [Twine](https://github.com/isentropic-dev/twine),
//! with velocity advisories and Reynolds-number flow-regime classification.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and the sizing API they wrap.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! Every physical input and output is a [`uom`] quantity, so flow rates may be
//! given in m³/h, L/min, or any other volume-rate unit without a separate
//! conversion step:
//!
//! ```
//! use twine_flow_sizing::models::fluid_flow::diameter_for;
//! use uom::si::{
//!     f64::{Velocity, VolumeRate},
//!     length::millimeter,
//!     velocity::meter_per_second,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! let diameter = diameter_for(
//!     VolumeRate::new::<cubic_meter_per_hour>(100.0),
//!     Velocity::new::<meter_per_second>(3.0),
//! )
//! .unwrap();
//!
//! assert!((diameter.get::<millimeter>() - 108.6).abs() < 0.05);
//! ```

pub mod models;
pub mod support;
