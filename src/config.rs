use std::path::{Path, PathBuf};

/// Name of the dataset file shipped next to the dashboard binary.
pub const DATA_FILE_NAME: &str = "all_data.csv";

// ---------------------------------------------------------------------------
// DashboardConfig
// ---------------------------------------------------------------------------

/// Static settings for one dashboard process.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Location of the source CSV.
    pub data_path: PathBuf,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl DashboardConfig {
    /// Configuration with the data file resolved against `base_dir`.
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            data_path: base_dir.join(DATA_FILE_NAME),
            window_title: "Bike Sharing Dashboard".to_string(),
            inner_size: [1100.0, 900.0],
            min_inner_size: [600.0, 400.0],
        }
    }

    /// Resolve the data file relative to the directory holding the executable.
    ///
    /// Falls back to the working directory when the executable path is unknown.
    pub fn from_deployment() -> Self {
        let base_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::with_base_dir(&base_dir)
    }
}
