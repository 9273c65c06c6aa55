//! Material streams and stream mixing.
//!
//! A [`Stream`] couples a molar flow rate with an immutable thermodynamic
//! state. Derived properties are evaluated on demand against a pluggable
//! [`PropertyModel`](mf_props::PropertyModel). Mixing combines streams under
//! mole and enthalpy conservation, solving the outlet temperature from the
//! enthalpy balance.

pub mod error;
pub mod mix;
pub mod stream;

pub use error::{StreamError, StreamResult};
pub use mix::{MixOptions, mix, mix_all, mix_with};
pub use stream::Stream;
