use std::fmt;
use std::str::FromStr;

use candle_core::Device;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

use super::error::EmbeddingError;

/// Where the encoder should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevicePreference {
    /// First available GPU backend compiled in, otherwise CPU.
    #[default]
    Auto,
    /// Always CPU, even when a GPU backend is compiled in.
    Cpu,
}

impl fmt::Display for DevicePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevicePreference::Auto => f.write_str("auto"),
            DevicePreference::Cpu => f.write_str("cpu"),
        }
    }
}

impl FromStr for DevicePreference {
    type Err = EmbeddingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(DevicePreference::Auto),
            "cpu" => Ok(DevicePreference::Cpu),
            other => Err(EmbeddingError::InvalidConfig {
                reason: format!("unknown device preference '{other}' (expected auto or cpu)"),
            }),
        }
    }
}

/// Selects the compute device for the sentence encoder.
///
/// With [`DevicePreference::Auto`] tries Metal, then CUDA, when the matching
/// cargo features are enabled. GPU failures are logged and fall back to CPU.
pub fn select_device(preference: DevicePreference) -> Result<Device, EmbeddingError> {
    if preference == DevicePreference::Cpu {
        debug!("CPU device requested explicitly");
        return Ok(Device::Cpu);
    }

    let mut failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Using Metal GPU acceleration");
            return Ok(device);
        }
        Err(e) => failures.push(format!("metal failed: {e}")),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Using CUDA GPU acceleration");
            return Ok(device);
        }
        Err(e) => failures.push(format!("cuda failed: {e}")),
    }

    if !cfg!(any(feature = "metal", feature = "cuda")) {
        debug!("No GPU backend compiled, using CPU");
        return Ok(Device::Cpu);
    }

    if failures.is_empty() {
        failures.push("no GPU device available".to_string());
    }

    warn!(reason = %failures.join("; "), "Falling back to CPU device");
    Ok(Device::Cpu)
}
