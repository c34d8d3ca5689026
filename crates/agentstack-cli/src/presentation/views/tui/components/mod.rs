pub mod agent_list;

pub use agent_list::{AgentListAction, AgentListComponent};
