use dioxus::prelude::*;

/// A signal holding "now" in epoch seconds, refreshed once per second.
///
/// Countdowns derive their remaining time from absolute deadlines and this
/// signal, so a delayed tick can only ever shorten a displayed window, never
/// extend the real one. The driving task is scoped to the calling component
/// and is cancelled with it on unmount.
pub fn use_second_tick() -> Signal<u64> {
    let mut now = use_signal(auth::now_secs);

    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::TimeoutFuture::new(1_000).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;

                now.set(auth::now_secs());
            }
        });
    });

    now
}
