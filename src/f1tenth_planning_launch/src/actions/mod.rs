//! Launch actions composing a plan

pub mod declare_argument;
pub mod group;
pub mod include;
pub mod node;

pub use declare_argument::{parse_launch_arg, DeclareArgumentAction};
pub use group::GroupAction;
pub use include::{IncludeAction, IncludeArg};
pub use node::{NodeAction, Remapping};
