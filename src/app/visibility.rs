use leptos::{html::Section, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_timeout_fn, UseIntersectionObserverOptions,
    UseTimeoutFnReturn,
};

use crate::reveal::{RevealState, REVEAL_TRANSITION_MS};

/// Observe a section's viewport visibility and drive its one-shot reveal
/// state machine. The observer disconnects after the first fire, and
/// leptos-use tears down anything left when the owning scope is disposed,
/// so nothing keeps running after unmount.
pub fn use_reveal(target: NodeRef<Section>, threshold: f64) -> ReadSignal<RevealState> {
    let (state, set_state) = signal(RevealState::default());

    let UseTimeoutFnReturn { start: settle, .. } = use_timeout_fn(
        move |_: ()| set_state.update(|s| s.settle()),
        REVEAL_TRANSITION_MS,
    );

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let entered = entries.iter().any(|entry| entry.is_intersecting());
            if entered && set_state.try_update(|s| s.on_visible()).unwrap_or(false) {
                observer.disconnect();
                settle(());
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    state
}

/// Classes for a section body that slides up as it reveals. The enter
/// transition runs once; afterwards the element just sits settled.
pub fn reveal_class(state: RevealState, base: &str) -> String {
    if state.is_revealed() {
        format!("{} transition-all duration-700 opacity-100 translate-y-0", base)
    } else {
        format!("{} opacity-0 translate-y-8", base)
    }
}
