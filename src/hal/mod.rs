pub mod delay;
pub mod gpio;

// Re-export commonly used types
pub use delay::{delay_ms, Delay};
pub use gpio::board;
pub use gpio::{Input, Output, Pin};
