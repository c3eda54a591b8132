/// Polled between animation ticks. A render pass in flight is never
/// interrupted; a stop request takes effect before the next tick.
pub trait CancelToken {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}
