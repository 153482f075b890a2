use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::use_element_visibility;

use crate::content::{
    build_year, ABOUT, CONTACT_BLURB, EXPERIENCE, PROFILE, SKILL_GROUPS, SOCIAL_LINKS,
};

use super::{projects::ProjectsSection, TextScramble};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <RevealSection id="about" class="bg-gray-800/50">
            <div class="max-w-3xl mx-auto">
                <h2 class="text-3xl font-bold mb-8 font-mono">
                    <TextScramble text="About Me" />
                </h2>
                <p class="text-gray-300 leading-relaxed mb-6 text-lg">{ABOUT}</p>
            </div>
        </RevealSection>
        <RevealSection id="expertise">
            <Expertise />
        </RevealSection>
        {(!EXPERIENCE.is_empty())
            .then(|| {
                view! {
                    <RevealSection id="experience" class="bg-gray-800/50">
                        <WorkExperience />
                    </RevealSection>
                }
            })}
        <RevealSection id="projects">
            <ProjectsSection />
        </RevealSection>
        <RevealSection id="contact">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-8 font-mono">
                    <TextScramble text="Get In Touch" />
                </h2>
                <p class="text-gray-300 mb-8">{CONTACT_BLURB}</p>
                <a
                    href=format!("mailto:{}", PROFILE.email)
                    class="inline-block bg-blue-500/20 hover:bg-blue-500/30 text-blue-300 px-6 py-3 rounded-md font-medium transition-all duration-200 border border-blue-400/30"
                >
                    {PROFILE.email}
                </a>
            </div>
        </RevealSection>
        <Footer />
    }
}

/// Slides its content into place the first time it scrolls into view.
#[component]
fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(section_ref);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    view! {
        <section
            id=id
            node_ref=section_ref
            class=move || {
                let motion = if revealed.get() {
                    "translate-y-0 opacity-100"
                } else {
                    "translate-y-24 opacity-0"
                };
                format!("py-16 px-4 transition-all duration-700 ease-out {class} {motion}")
            }
        >
            {children()}
        </section>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-32 pb-16 px-4">
            <div class="max-w-7xl mx-auto text-center">
                <div class="my-12">
                    <img
                        src=PROFILE.avatar
                        alt=PROFILE.name
                        class="w-48 h-48 rounded-full mx-auto border-4 border-blue-400 shadow-lg"
                    />
                </div>
                <h1 class="text-3xl font-bold mb-6 font-mono">
                    <TextScramble text=PROFILE.name />
                </h1>
                <div class="flex flex-col items-center gap-4 mb-8">
                    <Detail icon="extra-briefcase" text=PROFILE.role />
                    <Detail icon="extra-location" text=PROFILE.location />
                    <Detail icon="extra-email" text=PROFILE.email />
                </div>
                <div class="flex justify-center space-x-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.platform.label()
                                    class="p-2 text-2xl hover:text-blue-400 hover:scale-125 transition-all"
                                >
                                    <i class=link.platform.icon_class() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Detail(icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 text-gray-400">
            <i class=icon />
            <span>{text}</span>
        </div>
    }
}

#[component]
fn Expertise() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto">
            <h2 class="text-3xl font-bold mb-8 font-mono">
                <TextScramble text="Technical Expertise" />
            </h2>
            <div class="grid md:grid-cols-2 gap-6">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="bg-gray-800/30 p-6 rounded-lg transition-transform duration-200 hover:scale-105">
                                <h3 class="text-xl font-semibold mb-4">{group.title}</h3>
                                <p class="text-gray-300">{group.joined()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn WorkExperience() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto">
            <h2 class="text-3xl font-bold mb-8 font-mono">
                <TextScramble text="Work Experience" />
            </h2>
            <div class="space-y-8">
                {EXPERIENCE
                    .iter()
                    .enumerate()
                    .map(|(i, exp)| {
                        view! {
                            <div
                                class="bg-gray-800/30 p-6 rounded-lg animate-slide-in"
                                style=format!("animation-delay: {:.1}s;", i as f64 * 0.2)
                            >
                                <h3 class="text-xl font-semibold text-blue-400">{exp.role}</h3>
                                <div class="flex justify-between items-center mb-2">
                                    <span class="text-gray-300">{exp.company}</span>
                                    <span class="text-gray-400 text-sm">{exp.period}</span>
                                </div>
                                <p class="text-gray-300">{exp.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 text-center text-gray-400">
            <p>{format!("© {} {}. All rights reserved.", build_year(), PROFILE.name)}</p>
        </footer>
    }
}
