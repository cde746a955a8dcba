//! Input handling with gamepad and touch support
//!
//! Every device is folded into one [`InputSnapshot`] per frame.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Uses custom Web Gamepad API bindings (see web/index.html)

mod actions;
mod gamepad;
mod state;
mod touch;

pub use actions::*;
pub use gamepad::Gamepad;
pub use state::*;
pub use touch::TouchControls;
