pub mod agents;
pub mod export;
pub mod gen_agents;
pub mod orchestrate;
