//! Unified gamepad support for native and WASM
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Uses Web Gamepad API bindings via the JavaScript plugin in web/index.html
//!
//! Both backends report a button bitmask and the left stick's x axis once
//! per frame; edge detection is shared.

// Standard gamepad button indices (matches Web Gamepad API standard mapping)
pub mod button {
    pub const A: u32 = 0; // ActionDown / South
    pub const START: u32 = 9; // Start/Options
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Left stick deflection treated as a held direction
pub const STICK_THRESHOLD: f32 = 0.5;

// ============================================================================
// WASM Implementation (Web Gamepad API)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    // FFI bindings to JavaScript functions in index.html
    extern "C" {
        fn axolotl_gamepad_button_mask() -> u32;
        fn axolotl_gamepad_left_stick_x() -> i32;
    }

    pub struct Backend;

    impl Backend {
        pub fn new() -> Option<Self> {
            Some(Self)
        }

        /// Current button mask and left stick x (-1.0 to 1.0)
        pub fn read(&mut self) -> (u32, f32) {
            // Web Gamepad API is polled by the browser; the plugin scales the axis by 10000
            let mask = unsafe { axolotl_gamepad_button_mask() };
            let x = unsafe { axolotl_gamepad_left_stick_x() } as f32 / 10000.0;
            (mask, x)
        }
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Backend {
        gilrs: Gilrs,
    }

    impl Backend {
        pub fn new() -> Option<Self> {
            match Gilrs::new() {
                Ok(gilrs) => Some(Self { gilrs }),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            }
        }

        /// Current button mask and left stick x (-1.0 to 1.0)
        pub fn read(&mut self) -> (u32, f32) {
            // Process gilrs events to update internal state
            while self.gilrs.next_event().is_some() {}

            let Some((_, gp)) = self.gilrs.gamepads().next() else { return (0, 0.0) };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << super::button::START; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << super::button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << super::button::DPAD_RIGHT; }

            (mask, gp.value(Axis::LeftStickX))
        }
    }
}

// ============================================================================
// Shared state
// ============================================================================

/// Button mask for this frame and the previous one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    current: u32,
    previous: u32,
}

impl ButtonEdges {
    /// Start a new frame with a freshly read mask
    pub fn update(&mut self, mask: u32) {
        self.previous = self.current;
        self.current = mask;
    }

    pub fn is_down(&self, button: u32) -> bool {
        (self.current & (1 << button)) != 0
    }

    /// Down this frame but not the last
    pub fn is_pressed(&self, button: u32) -> bool {
        self.is_down(button) && (self.previous & (1 << button)) == 0
    }
}

/// First connected gamepad, if the platform supports any
pub struct Gamepad {
    backend: Option<platform::Backend>,
    buttons: ButtonEdges,
    stick_x: f32,
}

impl Gamepad {
    pub fn new() -> Self {
        Self {
            backend: platform::Backend::new(),
            buttons: ButtonEdges::default(),
            stick_x: 0.0,
        }
    }

    /// Read the hardware; call once per frame before any queries
    pub fn poll(&mut self) {
        let (mask, stick_x) = match self.backend.as_mut() {
            Some(backend) => backend.read(),
            None => (0, 0.0),
        };
        self.buttons.update(mask);
        self.stick_x = stick_x;
    }

    pub fn left_held(&self) -> bool {
        self.buttons.is_down(button::DPAD_LEFT) || self.stick_x < -STICK_THRESHOLD
    }

    pub fn right_held(&self) -> bool {
        self.buttons.is_down(button::DPAD_RIGHT) || self.stick_x > STICK_THRESHOLD
    }

    pub fn jump_pressed(&self) -> bool {
        self.buttons.is_pressed(button::A)
    }

    pub fn restart_pressed(&self) -> bool {
        self.buttons.is_pressed(button::START)
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_reported_once() {
        let mut edges = ButtonEdges::default();
        edges.update(1 << button::A);
        assert!(edges.is_pressed(button::A));
        assert!(edges.is_down(button::A));

        edges.update(1 << button::A);
        assert!(!edges.is_pressed(button::A));
        assert!(edges.is_down(button::A));

        edges.update(0);
        assert!(!edges.is_down(button::A));
        edges.update(1 << button::A);
        assert!(edges.is_pressed(button::A));
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut edges = ButtonEdges::default();
        edges.update(1 << button::START);
        edges.update((1 << button::START) | (1 << button::DPAD_LEFT));
        assert!(!edges.is_pressed(button::START));
        assert!(edges.is_pressed(button::DPAD_LEFT));
    }
}
