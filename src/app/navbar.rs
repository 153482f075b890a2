use leptos::{html, prelude::*};
use leptos_use::{on_click_outside, use_window_scroll};

use crate::content::{NAV_SECTIONS, PROFILE};

// px scrolled before the bar gets its solid background
const SCROLL_THRESHOLD: f64 = 50.0;

#[component]
pub fn NavBar() -> impl IntoView {
    let nav_ref = NodeRef::<html::Nav>::new();
    let (expanded, set_expanded) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    let _ = on_click_outside(nav_ref, move |_| set_expanded.set(false));

    let links = move |link_class: &'static str| {
        NAV_SECTIONS
            .iter()
            .map(|section| {
                view! {
                    <a href=section.href() class=link_class on:click=move |_| set_expanded.set(false)>
                        {section.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav
            node_ref=nav_ref
            class=move || {
                if scroll_y.get() > SCROLL_THRESHOLD {
                    "fixed top-0 w-full z-40 transition-colors duration-300 bg-gray-900/80 backdrop-blur-sm shadow-lg"
                } else {
                    "fixed top-0 w-full z-40 transition-colors duration-300 bg-transparent"
                }
            }
        >
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class="text-xl font-bold font-mono">
                        {PROFILE.initials}
                    </a>
                    <div class="hidden md:flex space-x-8">
                        {links("hover:text-blue-400 transition-colors")}
                    </div>
                    <button
                        class="md:hidden text-2xl"
                        aria-label="Toggle navigation"
                        aria-expanded=move || expanded.get().to_string()
                        on:click=move |_| set_expanded.update(|open| *open = !*open)
                    >
                        <i class=move || {
                            if expanded.get() { "extra-close" } else { "extra-menu" }
                        } />
                    </button>
                </div>
            </div>
            <Show when=move || expanded.get()>
                <div class="md:hidden">
                    <div class="flex flex-col px-2 pt-2 pb-3 space-y-1 bg-gray-900">
                        {links("block px-3 py-2 hover:bg-gray-800 rounded-md")}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
