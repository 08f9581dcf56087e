mod chart;
mod clock;
pub mod economy;
mod engine;
mod state;
mod time;

pub use chart::{ChartHistory, ChartSample};
pub use clock::{ClockReport, ClockState, SimulationClock};
pub use engine::{Engine, PurchaseError, PurchaseReceipt};
pub use state::GameState;
pub use time::{ManualTimeSource, SystemTimeSource, TimeSource};
