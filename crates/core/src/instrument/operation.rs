use crate::cache::Result;

/// A callable unit of work that middleware can wrap.
///
/// `Cache::store` is expressed as an `Operation` so that call counting and
/// call history can be layered on without touching its body.
pub trait Operation: Send + Sync {
    type Args;
    type Output;

    /// Runs the operation.
    fn invoke(&self, args: Self::Args) -> Result<Self::Output>;
}

impl<O: Operation + ?Sized> Operation for Box<O> {
    type Args = O::Args;
    type Output = O::Output;

    fn invoke(&self, args: Self::Args) -> Result<Self::Output> {
        (**self).invoke(args)
    }
}
