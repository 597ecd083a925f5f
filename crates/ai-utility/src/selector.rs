use ai_bt::{BtEvent, BtNode, BtStatus};
use ai_core::{Blackboard, DeterministicRng, TickContext, WorldMut};

use crate::{SelectionMode, UtilitySelectorConfig};

const UTILITY_STREAM: u64 = 0x5554_494c_4954;
const MAX_SCORE: f32 = 100.0;

type ScoreFn<W> =
    Box<dyn FnMut(&TickContext, <W as ai_core::WorldView>::Agent, &W, &Blackboard) -> f32>;

/// A child node paired with the function that rates how desirable running it is.
pub struct UtilityChild<W>
where
    W: WorldMut + 'static,
{
    node: Box<dyn BtNode<W>>,
    score_fn: ScoreFn<W>,
}

impl<W> UtilityChild<W>
where
    W: WorldMut + 'static,
{
    pub fn new(
        node: Box<dyn BtNode<W>>,
        score_fn: impl FnMut(&TickContext, W::Agent, &W, &Blackboard) -> f32 + 'static,
    ) -> Self {
        Self {
            node,
            score_fn: Box::new(score_fn),
        }
    }
}

/// Index picked by a single uniform `draw` in `[0, 1)` over `weights`.
///
/// Each entry is chosen with probability `weight / sum`. When every weight is zero the pick is
/// uniform. Returns `None` only for an empty slice.
pub fn weighted_pick(weights: &[f32], draw: f32) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        let i = (draw * weights.len() as f32) as usize;
        return Some(i.min(weights.len() - 1));
    }

    let target = draw * total;
    let mut acc = 0.0;
    for (i, w) in weights.iter().enumerate() {
        acc += w;
        if target < acc {
            return Some(i);
        }
    }
    // rounding can leave `target` just past the final boundary
    weights.iter().rposition(|w| *w > 0.0)
}

/// Runs the child with the best utility score.
///
/// Scores are computed fresh each tick and clamped to `[0, 100]`; the previous winner's score is
/// first multiplied by `1 + cooldown`. A child that fails is skipped and the next candidate is
/// tried, so the node only fails once every child has failed this tick.
pub struct UtilitySelector<W>
where
    W: WorldMut + 'static,
{
    children: Vec<UtilityChild<W>>,
    config: UtilitySelectorConfig,
    prev: Option<usize>,
    cooldown_current: f32,
    active: Option<usize>,
}

impl<W> UtilitySelector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<UtilityChild<W>>) -> Self {
        Self {
            children,
            config: UtilitySelectorConfig::default(),
            prev: None,
            cooldown_current: 0.0,
            active: None,
        }
    }

    pub fn with_config(mut self, config: UtilitySelectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Index of the child that won most recently.
    pub fn last_winner(&self) -> Option<usize> {
        self.prev
    }

    pub fn cooldown_current(&self) -> f32 {
        self.cooldown_current
    }

    fn score_all(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &W,
        blackboard: &Blackboard,
    ) -> Vec<f32> {
        let mut scores = Vec::with_capacity(self.children.len());
        for (i, child) in self.children.iter_mut().enumerate() {
            let mut score = (child.score_fn)(ctx, agent, world, blackboard);
            if score.is_nan() {
                score = 0.0;
            }
            if self.prev == Some(i) {
                score *= 1.0 + self.cooldown_current;
            }
            scores.push(score.clamp(0.0, MAX_SCORE));
        }
        scores
    }

    fn record_win(&mut self, index: usize) {
        self.cooldown_current = if self.prev == Some(index) {
            self.cooldown_current * self.config.cooldown
        } else {
            self.config.cooldown
        };
        self.prev = Some(index);
        self.active = Some(index);
    }

    fn run_deterministic(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        scores: &[f32],
    ) -> BtStatus {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        for index in order {
            let status = self.children[index].node.update(ctx, agent, world, blackboard);
            if status != BtStatus::Failure {
                self.record_win(index);
                tracing::debug!(
                    ?agent,
                    node = index,
                    score = scores[index],
                    cooldown = self.cooldown_current,
                    "utility selection"
                );
                return status;
            }
        }
        BtStatus::Failure
    }

    fn run_weighted(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        scores: &[f32],
    ) -> BtStatus {
        let mut rng = ctx.rng_for_agent(agent, UTILITY_STREAM);
        let mut candidates: Vec<usize> = (0..scores.len()).collect();

        while !candidates.is_empty() {
            let weights: Vec<f32> = candidates.iter().map(|&i| scores[i]).collect();
            let draw = rng.next_f32_unit();
            let Some(pos) = weighted_pick(&weights, draw) else {
                break;
            };
            let index = candidates[pos];

            let status = self.children[index].node.update(ctx, agent, world, blackboard);
            if status != BtStatus::Failure {
                self.record_win(index);
                tracing::debug!(
                    ?agent,
                    node = index,
                    score = scores[index],
                    cooldown = self.cooldown_current,
                    draw,
                    "utility selection"
                );
                return status;
            }
            candidates.remove(pos);
        }
        BtStatus::Failure
    }
}

impl<W> BtNode<W> for UtilitySelector<W>
where
    W: WorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let scores = self.score_all(ctx, agent, &*world, &*blackboard);
        self.active = None;

        match self.config.mode {
            SelectionMode::Deterministic => {
                self.run_deterministic(ctx, agent, world, blackboard, &scores)
            }
            SelectionMode::WeightedRandom => {
                self.run_weighted(ctx, agent, world, blackboard, &scores)
            }
        }
    }

    fn react(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        event: BtEvent,
    ) {
        if let Some(child) = self.active.and_then(|i| self.children.get_mut(i)) {
            child.node.react(ctx, agent, world, blackboard, event);
        }
    }
}

pub fn utility_selector<W>(
    children: Vec<UtilityChild<W>>,
    config: UtilitySelectorConfig,
) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(UtilitySelector::new(children).with_config(config))
}
