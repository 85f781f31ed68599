//! Compute device detection.
//!
//! Used once, when a real model is loaded, to decide whether layers are
//! offloaded to an accelerator.

use std::fmt;
use std::process::Command;

/// Layer count passed to llama-server to offload the whole model.
pub const OFFLOAD_ALL_LAYERS: u32 = 999;

/// Where model layers are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeDevice {
    /// NVIDIA GPU (CUDA).
    Cuda,
    /// Apple Silicon unified memory (Metal).
    Metal,
    /// No accelerator; everything stays on the CPU.
    Cpu,
}

impl ComputeDevice {
    pub const fn is_accelerator(self) -> bool {
        !matches!(self, Self::Cpu)
    }

    /// Value for llama-server's `-ngl` flag.
    pub const fn gpu_layers(self) -> u32 {
        if self.is_accelerator() {
            OFFLOAD_ALL_LAYERS
        } else {
            0
        }
    }
}

impl fmt::Display for ComputeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cuda => "cuda",
            Self::Metal => "metal",
            Self::Cpu => "cpu",
        };
        f.write_str(name)
    }
}

/// Pick the accelerator if one is present, otherwise the CPU.
pub fn detect_compute_device() -> ComputeDevice {
    if cfg!(all(target_os = "macos", target_arch = "aarch64")) {
        ComputeDevice::Metal
    } else if detect_nvidia_hardware() {
        ComputeDevice::Cuda
    } else {
        ComputeDevice::Cpu
    }
}

/// Detect if NVIDIA GPU hardware is present with working drivers.
fn detect_nvidia_hardware() -> bool {
    Command::new("nvidia-smi")
        .arg("--list-gpus")
        .output()
        .map(|o| o.status.success() && !o.stdout.is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_layers() {
        assert_eq!(ComputeDevice::Cpu.gpu_layers(), 0);
        assert_eq!(ComputeDevice::Cuda.gpu_layers(), OFFLOAD_ALL_LAYERS);
        assert_eq!(ComputeDevice::Metal.gpu_layers(), OFFLOAD_ALL_LAYERS);
    }

    #[test]
    fn test_detect_compute_device_returns_valid() {
        let device = detect_compute_device();
        #[cfg(all(target_os = "macos", target_arch = "aarch64"))]
        assert_eq!(device, ComputeDevice::Metal);
        #[cfg(not(all(target_os = "macos", target_arch = "aarch64")))]
        assert_ne!(device, ComputeDevice::Metal);
    }
}
