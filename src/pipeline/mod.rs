//! The world orchestrator: bodies, configuration, and the per-tick pipeline.

pub use self::body_desc::BodyDesc;
pub use self::config::{Capacities, WorldConfig};
pub use self::error::{PipelineError, Resource};
#[cfg(feature = "parallel")]
pub use self::execution::ParallelExecution;
pub use self::execution::{ExecutionStrategy, SequentialExecution};
pub use self::frame::Frame;
pub(crate) use self::frame::FrameBuffers;
pub use self::world::{TickReport, World};

mod body_desc;
mod config;
mod error;
mod execution;
mod frame;
mod world;
