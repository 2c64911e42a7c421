// File: crates/chart-animate/src/lib.rs
// Summary: Renders a growing line chart frame by frame through an in-memory PNG buffer and
//          assembles the decoded frames into an animated GIF.
//
// Pipeline: samples -> configure (once) -> [render -> decode] x (N + 1) -> encode (once).

pub mod animator;
pub mod buffer;
pub mod config;
pub mod configure;
pub mod decode;
pub mod encode;
pub mod error;
pub mod samples;

pub use animator::{run, AnimationReport, Animator};
pub use buffer::FrameBuffer;
pub use config::AnimationConfig;
pub use configure::{AxisConfig, ChartConfig};
pub use decode::{decode_frame, shape};
pub use encode::{encode_gif, write_gif, GifOptions, LoopMode};
pub use error::AnimateError;
pub use samples::SampleSeries;
