// Adapters - External system implementations

pub mod exec_process;
pub mod probe_ffprobe;
pub mod tracing_log;

// Re-export adapters
pub use exec_process::ProcessRunner;
pub use probe_ffprobe::FfprobeAdapter;
pub use tracing_log::init_logging;
