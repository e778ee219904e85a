use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info, warn};

use crate::application::RuntimeConfig;
use crate::filesystem::{LoadError, PathList, PathTree, WriteError, write_output};

pub struct Application;

impl Application {
    /// Loads the path list, builds the tree, renders it and writes the result.
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let path_list = PathList::read(&app_config.input_path)
            .await
            .context(LoadStageSnafu)?;
        if path_list.is_empty() {
            warn!(
                "No paths listed in {}, only the root will be rendered",
                app_config.input_path.display()
            );
        }
        info!("Loaded {} paths", path_list.len());

        let tree = Self::build_tree(&app_config, &path_list);
        info!("Built tree with {} top-level entries", tree.len());

        write_output(&app_config.output_path, tree.render())
            .await
            .context(WriteStageSnafu)?;

        println!("Wrote {}", app_config.output_path.display());
        Ok(())
    }

    fn build_tree(app_config: &RuntimeConfig, path_list: &PathList) -> PathTree {
        debug!(
            "Building tree relative to '{}'",
            app_config.root_prefix.as_str()
        );
        path_list
            .iter()
            .filter_map(|path| app_config.root_prefix.relativize(path))
            .collect()
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the path list"))]
    LoadStageError { source: LoadError },
    #[snafu(display("Critical failure encountered while writing the formatted tree"))]
    WriteStageError { source: WriteError },
}
