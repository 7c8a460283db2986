// Interaction tuning constants shared by the web and native frontends.

// Classification
pub const ACCEPT_THRESHOLD: f32 = 120.0; // |dx| that must be exceeded to commit a swipe

// Visual feedback
pub const MAX_ROTATION_DEG: f32 = 10.0; // card tilt reached at half the viewport width
pub const ROTATION_SPAN_FRACTION: f32 = 0.5; // rotation saturates at W * fraction
pub const LABEL_SPAN_FRACTION: f32 = 0.25; // LIKE / NOPE fully visible at W * fraction

// Exit animation
pub const EXIT_OVERSHOOT: f32 = 100.0; // distance past the viewport edge the card flies to
pub const EXIT_DURATION_MS: u64 = 250;

// Snap-back spring (tension 40 / friction 7 expressed as stiffness / damping)
pub const SPRING_STIFFNESS: f32 = 230.2;
pub const SPRING_DAMPING: f32 = 22.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DISPLACEMENT: f32 = 0.001;
pub const SPRING_REST_SPEED: f32 = 0.001;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 0.004; // integrator substep cap for large frame deltas
pub const SPRING_MAX_FRAME_SEC: f32 = 0.25; // longer frames advance the spring by this much only

// Viewport
pub const MIN_VIEWPORT_EXTENT: f32 = 1.0;
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 390.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 844.0;
