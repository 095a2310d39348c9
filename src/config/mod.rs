mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    ChangelogConfig, CllConfig, Config, CustomLanguageConfig, ScannerConfig, ServeConfig,
    WatchConfig,
};
pub use validation::{MAX_TAB_WIDTH, validate_config_semantics};
