use candle_core::Device;
use tracing::debug;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

/// Picks the compute device for the encoder.
///
/// Tries Metal, then CUDA, when the matching feature is compiled in; otherwise
/// (or when every GPU backend fails) the encoder runs on the CPU.
pub fn select_device() -> Device {
    #[cfg(any(feature = "metal", feature = "cuda"))]
    let mut failures: Vec<String> = Vec::new();

    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Encoder using Metal GPU");
            return device;
        }
        Err(e) => failures.push(format!("metal: {e}")),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Encoder using CUDA GPU");
            return device;
        }
        Err(e) => failures.push(format!("cuda: {e}")),
    }

    #[cfg(any(feature = "metal", feature = "cuda"))]
    warn!(failures = %failures.join("; "), "GPU unavailable, encoder falling back to CPU");

    if !cfg!(any(feature = "metal", feature = "cuda")) {
        debug!("No GPU backend compiled, encoder using CPU");
    }

    Device::Cpu
}

/// Short label for logs.
pub fn device_label(device: &Device) -> &'static str {
    match device {
        Device::Cpu => "cpu",
        Device::Cuda(_) => "cuda",
        Device::Metal(_) => "metal",
    }
}
