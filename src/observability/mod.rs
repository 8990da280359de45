//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Launcher / coordinator / startup produce:
//!     → events.rs (named LaunchEvent values)
//!     → EventSink implementations:
//!         - logging.rs (TracingSink: structured log lines)
//!         - events.rs (RecordingSink: in-memory, for tests)
//!     → metrics.rs (running apps gauge, termination counters)
//! ```
//!
//! # Design Decisions
//! - The core never formats log text; it emits events and a sink renders them
//! - Metrics are cheap (atomic increments) and exporter is optional

pub mod events;
pub mod logging;
pub mod metrics;

pub use events::{EventSink, LaunchEvent, RecordingSink};
pub use logging::{init_logging, TracingSink};
