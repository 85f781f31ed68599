//! Host probing for model placement.

pub mod gpu;

pub use gpu::{ComputeDevice, OFFLOAD_ALL_LAYERS, detect_compute_device};
