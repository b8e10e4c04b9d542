/// A unit of work submitted to a pattern. Created by the caller and
/// consumed by exactly one worker.
pub type Job = i64;

/// The value produced by applying a pure transform to a [`Job`].
pub type JobResult = i64;
