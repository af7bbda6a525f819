use async_trait::async_trait;

use crate::errors::ComponentGptResult;
use crate::models::node::DesignNode;

/// Selection and rendering capabilities of the design-tool host
#[async_trait]
pub trait DesignTool: Send + Sync {
    /// Nodes currently selected on the active page, in selection order
    fn current_selection(&self) -> Vec<DesignNode>;

    /// Rasterize a node to PNG bytes
    async fn export_as_image(&self, node: &DesignNode) -> ComponentGptResult<Vec<u8>>;
}
