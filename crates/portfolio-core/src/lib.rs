//! Platform-independent core of the portfolio sky background.
//!
//! Nothing here touches the browser: layers draw through [`Surface`], take
//! their inputs as a [`FrameInput`] snapshot, and draw random numbers from an
//! injected `StdRng`, so frames can be stepped and inspected on the host.

pub mod constants;
pub mod contact;
pub mod field;
pub mod frame;
pub mod mist;
pub mod page;
pub mod surface;
pub mod theme;

pub use contact::*;
pub use field::*;
pub use frame::*;
pub use mist::*;
pub use page::*;
pub use surface::*;
pub use theme::*;
