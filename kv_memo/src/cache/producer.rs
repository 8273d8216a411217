use std::future::Future;

/// The expensive operation a [`CacheAside`](super::CacheAside) protects.
///
/// `A` carries the call-time arguments; use `()` for a parameterless producer.
/// Any `Fn(A) -> impl Future<Output = Result<String, E>>` closure is a producer.
pub trait Producer<A>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn produce(&self, args: A) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

impl<A, F, Fut, E> Producer<A> for F
where
    F: Fn(A) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String, E>> + Send,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn produce(&self, args: A) -> impl Future<Output = Result<String, E>> + Send {
        (self)(args)
    }
}
