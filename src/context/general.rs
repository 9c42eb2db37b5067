use tracing::debug;

use super::template::{ITEM_NAME, general_guidance};
use crate::context::{
    ContextError, ContextItem, ContextProviderDescription, ContextProviderKind,
    ContextProviderTrait,
};
use crate::host::Ide;

static DESCRIPTION: ContextProviderDescription = ContextProviderDescription {
    title: "beginner",
    display_title: "Beginner",
    description: "Provide beginner-friendly context",
    kind: ContextProviderKind::Normal,
    render_inline_as: "",
};

/// Fixed guidance for explaining things to a newcomer. Ignores the workspace.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralBeginnerProvider;

impl ContextProviderTrait for GeneralBeginnerProvider {
    fn description(&self) -> &'static ContextProviderDescription {
        &DESCRIPTION
    }

    async fn get_context_items(
        &self,
        query: &str,
        _ide: &impl Ide,
    ) -> Result<Vec<ContextItem>, ContextError> {
        debug!("Providing general beginner context for query {query:?}");

        Ok(vec![ContextItem {
            name: ITEM_NAME.to_string(),
            description: "General context for beginner-friendly explanations".to_string(),
            content: general_guidance().to_string(),
        }])
    }
}
