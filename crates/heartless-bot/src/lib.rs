pub mod bot;
pub mod policy;

pub use bot::{BotContext, DecisionError, PassPlanner, PlayBranch, PlayPlanner, PlayRole};
pub use policy::{Policy, PolicyContext, ReplicaPolicy};
