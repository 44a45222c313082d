use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll, Waker},
};

use crate::foundation::error::{VanishError, VanishResult};

/// Boxed, single-threaded generation future.
pub type GenerateFuture = Pin<Box<dyn Future<Output = anyhow::Result<String>>>>;

/// The host's asynchronous "generate" call, invoked once per accepted submission.
pub trait Generator {
    fn generate(&mut self, prompt: String) -> GenerateFuture;
}

impl<F, Fut> Generator for F
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = anyhow::Result<String>> + 'static,
{
    fn generate(&mut self, prompt: String) -> GenerateFuture {
        Box::pin(self(prompt))
    }
}

/// Settled result of one generation call.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub prompt: String,
    pub result: VanishResult<String>,
}

/// A generation call in flight, polled cooperatively from the frame loop.
pub(crate) struct PendingGeneration {
    prompt: String,
    future: GenerateFuture,
}

impl PendingGeneration {
    pub(crate) fn start(generator: &mut impl Generator, prompt: String) -> Self {
        let future = generator.generate(prompt.clone());
        Self { prompt, future }
    }

    /// Poll once with a no-op waker; the frame loop re-polls on every tick.
    pub(crate) fn poll_once(&mut self) -> Option<GenerationOutcome> {
        let mut cx = Context::from_waker(Waker::noop());
        match self.future.as_mut().poll(&mut cx) {
            Poll::Pending => None,
            Poll::Ready(result) => Some(GenerationOutcome {
                prompt: std::mem::take(&mut self.prompt),
                result: result.map_err(VanishError::generation),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/generate.rs"]
mod tests;
