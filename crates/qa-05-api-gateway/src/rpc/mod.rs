//! RPC method handlers for the JSON-RPC API.

pub mod content;
pub mod moderation;
pub mod voting;

pub use content::ContentRpc;
pub use moderation::ModerationRpc;
pub use voting::VotingRpc;

use qa_02_content::ContentApi;
use qa_03_voting::VotingApi;
use qa_04_moderation::ModerationApi;
use std::sync::Arc;

/// All RPC handlers
pub struct RpcHandlers {
    pub content: ContentRpc,
    pub voting: VotingRpc,
    pub moderation: ModerationRpc,
}

impl RpcHandlers {
    pub fn new(
        content: Arc<dyn ContentApi>,
        voting: Arc<dyn VotingApi>,
        moderation: Arc<dyn ModerationApi>,
    ) -> Self {
        Self {
            content: ContentRpc::new(content),
            voting: VotingRpc::new(voting),
            moderation: ModerationRpc::new(moderation),
        }
    }
}
