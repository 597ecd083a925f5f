use ai_core::WorldView;

/// Boolean guard on a state-machine edge.
///
/// `duration` is the time accumulated by the owning [`Transition`]; combinators pass it through
/// unchanged, so nested time-based guards see the same clock as their wrapper.
pub trait TransitionPredicate<W>: 'static
where
    W: WorldView + 'static,
{
    fn available(&self, duration: f32, agent: W::Agent, world: &W) -> bool;
}

/// Closure-backed predicate.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F, W> TransitionPredicate<W> for Condition<F>
where
    F: Fn(f32, W::Agent, &W) -> bool + 'static,
    W: WorldView + 'static,
{
    fn available(&self, duration: f32, agent: W::Agent, world: &W) -> bool {
        (self.cond)(duration, agent, world)
    }
}

pub struct Not<W>
where
    W: WorldView + 'static,
{
    inner: Box<dyn TransitionPredicate<W>>,
}

impl<W> Not<W>
where
    W: WorldView + 'static,
{
    pub fn new(inner: impl TransitionPredicate<W>) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl<W> TransitionPredicate<W> for Not<W>
where
    W: WorldView + 'static,
{
    fn available(&self, duration: f32, agent: W::Agent, world: &W) -> bool {
        !self.inner.available(duration, agent, world)
    }
}

/// Conjunction; `rhs` is only evaluated when `lhs` holds.
pub struct And<W>
where
    W: WorldView + 'static,
{
    lhs: Box<dyn TransitionPredicate<W>>,
    rhs: Box<dyn TransitionPredicate<W>>,
}

impl<W> And<W>
where
    W: WorldView + 'static,
{
    pub fn new(lhs: impl TransitionPredicate<W>, rhs: impl TransitionPredicate<W>) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl<W> TransitionPredicate<W> for And<W>
where
    W: WorldView + 'static,
{
    fn available(&self, duration: f32, agent: W::Agent, world: &W) -> bool {
        self.lhs.available(duration, agent, world) && self.rhs.available(duration, agent, world)
    }
}

/// A predicate plus the time it has been polled for.
///
/// Duration only grows while the edge is polled (i.e. while its source state is current) and is
/// cleared only by [`Transition::reset`].
pub struct Transition<W>
where
    W: WorldView + 'static,
{
    predicate: Box<dyn TransitionPredicate<W>>,
    duration: f32,
}

impl<W> Transition<W>
where
    W: WorldView + 'static,
{
    pub fn new(predicate: impl TransitionPredicate<W>) -> Self {
        Self::from_boxed(Box::new(predicate))
    }

    pub fn from_boxed(predicate: Box<dyn TransitionPredicate<W>>) -> Self {
        Self {
            predicate,
            duration: 0.0,
        }
    }

    /// Advance the clock by `dt`, then evaluate.
    pub fn poll(&mut self, dt: f32, agent: W::Agent, world: &W) -> bool {
        self.duration += dt;
        self.available(agent, world)
    }

    pub fn available(&self, agent: W::Agent, world: &W) -> bool {
        self.predicate.available(self.duration, agent, world)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn reset(&mut self) {
        self.duration = 0.0;
    }
}
