//! Behavior Tree runtime built on `ai-core`.
//!
//! Trees are evaluated from the root every tick; nodes keep no progress between ticks except what
//! they write into the agent's blackboard or their own fields. Composites remember which child
//! produced the last result only so that out-of-band [`BtEvent`]s can be routed to it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod error;
pub mod leaves;
pub mod nodes;
pub mod policy;

pub use bt::{BtEvent, BtNode, BtStatus};
pub use error::BtError;
pub use leaves::{
    find_base, find_enemy, flee, get_next_waypoint, is_low_hp, is_safe, move_to_entity, patch_up,
    patrol, random_walk, set_random_color, FindBase, FindEnemy, Flee, GetNextWaypoint, IsLowHp,
    IsSafe, MoveToEntity, PatchUp, Patrol, RandomWalk, SetRandomColor, DANGER_SLOT,
};
pub use nodes::{
    fallback, logic_not, logic_or, parallel, selector, sequence, Condition, Inverse, Or, Parallel,
    Selector, Sequence,
};
pub use policy::BehaviorTree;
