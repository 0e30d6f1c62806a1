use crate::adapters::{FfprobeAdapter, ProcessRunner};
use crate::app::shrink_interactor::ShrinkInteractor;
use crate::browser::FileBrowser;
use crate::config_initialization::AppConfig;
use crate::engine::TwoPassEncoder;
use crate::planner::PlanBuilder;

/// Interactor wired to the real ffmpeg/ffprobe processes
pub type DefaultShrinkInteractor = ShrinkInteractor<FfprobeAdapter<ProcessRunner>, ProcessRunner>;

/// Builds the production object graph from resolved configuration
pub struct DefaultAppContainer {
    config: AppConfig,
}

impl DefaultAppContainer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn shrink_interactor(&self) -> DefaultShrinkInteractor {
        let config = &self.config;
        let runner = ProcessRunner::new();

        let browser = FileBrowser::new(config.start_dir(), &config.home, &config.shared_root);
        let planner = PlanBuilder::new(
            FfprobeAdapter::new(&config.ffprobe, runner),
            &config.shared_root,
            &config.home,
        );
        let encoder = TwoPassEncoder::new(runner, &config.ffmpeg, config.preset.clone());

        ShrinkInteractor::new(browser, planner, encoder)
    }
}
