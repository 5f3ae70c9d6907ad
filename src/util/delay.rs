//! One-shot scheduling for UI side effects (toast dismissal, post-success
//! redirects). Requires a browser environment; native builds drop the
//! callback since there is no event loop to run it on.

pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ms).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, Box::new(f) as Box<dyn FnOnce()>);
    }
}
