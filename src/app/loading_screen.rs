use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::loading::{
    orbit_ring_style, stream_bar_style, LoadPhase, LoadingSequence, ORBIT_RINGS, STREAM_BARS,
};

/// Full-screen overlay covering the page while the app hydrates.
#[component]
pub fn LoadingScreen(#[prop(optional)] sequence: LoadingSequence) -> impl IntoView {
    let (phase, set_phase) = signal(LoadPhase::Visible);

    let UseTimeoutFnReturn {
        start: start_fade, ..
    } = use_timeout_fn(
        move |next: LoadPhase| set_phase.set(next),
        sequence.fade.as_millis() as f64,
    );
    let UseTimeoutFnReturn {
        start: start_hold, ..
    } = use_timeout_fn(
        move |next: LoadPhase| {
            set_phase.set(next);
            if let Some((after, _)) = sequence.next(next) {
                start_fade(after);
            }
        },
        sequence.hold.as_millis() as f64,
    );

    Effect::new(move |_| {
        if let Some((next, _)) = sequence.next(LoadPhase::Visible) {
            log::debug!("loading screen visible for {:?}", sequence.hold);
            start_hold(next);
        }
    });

    view! {
        <Show when=move || phase.get().is_mounted()>
            <div
                role="status"
                aria-label="Loading"
                class=move || {
                    format!(
                        "fixed inset-0 z-50 flex items-center justify-center overflow-hidden bg-white transition-opacity duration-500 {}",
                        phase.get().overlay_class(),
                    )
                }
            >
                <div class="absolute inset-0 opacity-[0.03] loading-grid"></div>
                <div class="absolute inset-0 pointer-events-none animate-scan">
                    <div class="w-full h-[2px] bg-gradient-to-r from-transparent via-black/20 to-transparent blur-sm"></div>
                </div>
                <div class="h-[2px] bg-black absolute top-0 left-0 shadow-[0_0_10px_rgba(0,0,0,0.3)] animate-progress"></div>

                <div class="relative flex flex-col items-center gap-8">
                    <div class="relative w-32 h-32">
                        {(0..ORBIT_RINGS)
                            .map(|i| {
                                view! {
                                    <div
                                        class="absolute inset-0 border border-black/10 rounded-full animate-orbit"
                                        style=orbit_ring_style(i)
                                    >
                                        <div class="absolute w-2 h-2 bg-black rounded-full -top-1 left-1/2 -translate-x-1/2"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="absolute inset-0 m-auto w-3 h-3 bg-black rounded-full animate-core-pulse"></div>
                    </div>

                    <div class="flex flex-col items-center gap-3">
                        <p class="text-sm text-black font-light tracking-[0.3em] uppercase animate-breathe">
                            "Loading"
                        </p>
                        <div class="flex items-center gap-2 text-xs text-gray-400 font-mono animate-fade-in">
                            <span class="animate-breathe">"▸"</span>
                            <span class="animate-flicker">"INITIALIZING SYSTEM"</span>
                        </div>
                        <div class="flex gap-1 mt-2">
                            {(0..STREAM_BARS)
                                .map(|i| {
                                    view! {
                                        <div
                                            class="w-[2px] bg-black/40 animate-stream"
                                            style=stream_bar_style(i)
                                        ></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="absolute top-6 left-6 w-8 h-8 border-t border-l border-black/10"></div>
                <div class="absolute top-6 right-6 w-8 h-8 border-t border-r border-black/10"></div>
                <div class="absolute bottom-6 left-6 w-8 h-8 border-b border-l border-black/10"></div>
                <div class="absolute bottom-6 right-6 w-8 h-8 border-b border-r border-black/10"></div>

                <div class="absolute bottom-6 left-1/2 -translate-x-1/2 text-[10px] text-gray-400 font-mono tracking-wider opacity-30">
                    {concat!("v", env!("CARGO_PKG_VERSION"))}
                </div>
            </div>
        </Show>
    }
}
