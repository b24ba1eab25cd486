//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only assembles
//! them for the STDIO/TCP transports.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::VerifyFactsTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(VerifyFactsTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"verify_facts"));
    }

    #[test]
    fn test_routed_tools_carry_schemas() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
            assert!(schema.get("properties").is_some());
        }
    }
}
