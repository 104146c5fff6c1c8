pub mod groups;
pub mod notes;
pub mod stats;
pub mod victims;
mod registry;

pub use groups::{GroupInfoTool, ListGroupsTool};
pub use notes::{GroupRansomNotesTool, RansomNoteContentTool, RansomNotesTool};
pub use registry::{
    api_outcome, schema_enum_string, schema_object, schema_pattern_string, schema_string,
    validation_failure, Tool, ToolRegistry,
};
pub use stats::{ListSectorsTool, StatsTool};
pub use victims::{ListVictimsTool, RecentVictimsTool, SearchVictimsTool, VictimInfoTool};

use ransomlive_api::RansomClient;
use std::sync::Arc;

/// Build the registry with every tool this server exposes.
pub fn default_registry(client: Arc<RansomClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(ListSectorsTool::new(client.clone())));
    registry.register(Arc::new(StatsTool::new(client.clone())));

    registry.register(Arc::new(ListGroupsTool::new(client.clone())));
    registry.register(Arc::new(GroupInfoTool::new(client.clone())));

    registry.register(Arc::new(ListVictimsTool::new(client.clone())));
    registry.register(Arc::new(VictimInfoTool::new(client.clone())));
    registry.register(Arc::new(SearchVictimsTool::new(client.clone())));
    registry.register(Arc::new(RecentVictimsTool::new(client.clone())));

    registry.register(Arc::new(RansomNotesTool::new(client.clone())));
    registry.register(Arc::new(GroupRansomNotesTool::new(client.clone())));
    registry.register(Arc::new(RansomNoteContentTool::new(client)));

    registry
}
