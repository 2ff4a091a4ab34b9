use std::iter::FusedIterator;

use tracing::trace;

use crate::error::{OperationError, Result};
use crate::math::{Point2, EPSILON};

use super::PathSegment;

/// Re-emits a flattened path so that no two consecutive points are farther
/// apart than a maximum delta.
///
/// Segments longer than `max_delta` are split into `ceil(length / max_delta)`
/// steps of equal length. Intermediate points lie on the original segment and
/// the last step of every segment lands exactly on its original endpoint.
///
/// The resampler can be driven as a cursor ([`current`](Self::current),
/// [`advance`](Self::advance), [`is_done`](Self::is_done)) or as an
/// [`Iterator`] over [`PathSegment`]s, so it can wrap and be wrapped by any
/// other flattened-path producer.
#[derive(Debug, Clone)]
pub struct DeltaResampler<I> {
    delegate: I,
    max_delta: f64,
    state: State,
    current: Option<PathSegment>,
    /// End point of the last segment pulled from the delegate.
    position: Point2,
    /// Start of the current sub-path, the target of a `Close`.
    last_move: Point2,
}

#[derive(Debug, Clone, Copy)]
enum State {
    AwaitingDelegateSegment,
    SteppingSegment(Subdivision),
    Done,
}

/// Plan for walking one delegate segment in equal steps.
#[derive(Debug, Clone, Copy)]
struct Subdivision {
    from: Point2,
    to: Point2,
    length: f64,
    step: f64,
    /// Distance walked along the segment so far.
    walked: f64,
    close: bool,
}

impl Subdivision {
    fn new(from: Point2, to: Point2, max_delta: f64, close: bool) -> Self {
        let length = (to - from).norm();
        let step = if length > EPSILON {
            length / (length / max_delta).ceil()
        } else {
            max_delta
        };
        Self {
            from,
            to,
            length,
            step,
            walked: 0.0,
            close,
        }
    }
}

impl<I> DeltaResampler<I>
where
    I: Iterator<Item = PathSegment>,
{
    /// Wraps `delegate` and pulls its first segment, so that
    /// [`current`](Self::current) is valid right away.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `max_delta` is not a
    /// positive finite number.
    pub fn new(delegate: I, max_delta: f64) -> Result<Self> {
        if !max_delta.is_finite() || max_delta <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "max_delta must be positive and finite, got {max_delta}"
            ))
            .into());
        }
        let mut resampler = Self {
            delegate,
            max_delta,
            state: State::AwaitingDelegateSegment,
            current: None,
            position: Point2::origin(),
            last_move: Point2::origin(),
        };
        resampler.advance();
        Ok(resampler)
    }

    /// The maximum distance between two consecutive emitted points.
    #[must_use]
    pub fn max_delta(&self) -> f64 {
        self.max_delta
    }

    /// Whether the delegate is exhausted and every step has been emitted.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// The segment at the cursor, or `None` once the resampler is done.
    #[must_use]
    pub fn current(&self) -> Option<PathSegment> {
        self.current
    }

    /// Moves the cursor to the next output segment.
    pub fn advance(&mut self) {
        self.current = match self.state {
            State::Done => None,
            State::AwaitingDelegateSegment => self.pull(),
            State::SteppingSegment(plan) => Some(self.step(plan)),
        };
    }

    fn pull(&mut self) -> Option<PathSegment> {
        let Some(segment) = self.delegate.next() else {
            self.state = State::Done;
            return None;
        };
        let (target, close) = match segment {
            PathSegment::MoveTo(p) => {
                self.position = p;
                self.last_move = p;
                return Some(segment);
            }
            PathSegment::LineTo(p) => (p, false),
            PathSegment::Close => (self.last_move, true),
        };

        let plan = Subdivision::new(self.position, target, self.max_delta, close);
        trace!(
            length = plan.length,
            step = plan.step,
            close,
            "subdividing segment"
        );
        self.position = target;
        Some(self.step(plan))
    }

    fn step(&mut self, mut plan: Subdivision) -> PathSegment {
        plan.walked += plan.step;
        if plan.walked >= plan.length - EPSILON {
            self.state = State::AwaitingDelegateSegment;
            return if plan.close {
                PathSegment::Close
            } else {
                PathSegment::LineTo(plan.to)
            };
        }
        self.state = State::SteppingSegment(plan);
        let t = plan.walked / plan.length;
        PathSegment::LineTo(plan.from + (plan.to - plan.from) * t)
    }
}

impl<I> Iterator for DeltaResampler<I>
where
    I: Iterator<Item = PathSegment>,
{
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        let segment = self.current?;
        self.advance();
        Some(segment)
    }
}

impl<I> FusedIterator for DeltaResampler<I> where I: Iterator<Item = PathSegment> {}

/// Wraps a flattened path in a [`DeltaResampler`].
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `max_delta` is not a positive
/// finite number.
pub fn delta_resample<P>(path: P, max_delta: f64) -> Result<DeltaResampler<P::IntoIter>>
where
    P: IntoIterator<Item = PathSegment>,
{
    DeltaResampler::new(path.into_iter(), max_delta)
}
