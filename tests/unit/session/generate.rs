use std::{cell::Cell, rc::Rc};

use super::*;

/// Resolves after being polled `remaining` more times.
struct Countdown {
    remaining: u32,
}

impl Future for Countdown {
    type Output = anyhow::Result<String>;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.remaining == 0 {
            return Poll::Ready(Ok("done".to_string()));
        }
        self.remaining -= 1;
        Poll::Pending
    }
}

#[test]
fn closure_generators_receive_the_prompt() {
    let seen = Rc::new(Cell::new(0usize));
    let seen_in = seen.clone();
    let mut generator = move |prompt: String| {
        seen_in.set(prompt.len());
        async move { Ok::<_, anyhow::Error>(format!("echo: {prompt}")) }
    };
    let mut pending = PendingGeneration::start(&mut generator, "hello".to_string());
    assert_eq!(seen.get(), 5);

    let outcome = pending.poll_once().unwrap();
    assert_eq!(outcome.prompt, "hello");
    assert_eq!(outcome.result.unwrap(), "echo: hello");
}

#[test]
fn pending_future_is_polled_until_ready() {
    let mut generator = |_prompt: String| Countdown { remaining: 2 };
    let mut pending = PendingGeneration::start(&mut generator, "p".to_string());
    assert!(pending.poll_once().is_none());
    assert!(pending.poll_once().is_none());
    assert!(pending.poll_once().unwrap().result.is_ok());
}

#[test]
fn rejection_maps_to_generation_error() {
    let mut generator = |_prompt: String| async { Err::<String, _>(anyhow::anyhow!("quota exceeded")) };
    let mut pending = PendingGeneration::start(&mut generator, "p".to_string());
    let err = pending.poll_once().unwrap().result.unwrap_err();
    assert!(matches!(err, VanishError::Generation(_)));
    assert!(err.to_string().contains("quota exceeded"));
}
