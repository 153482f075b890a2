use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};

#[cfg(feature = "ssr")]
use crate::content::get_projects;
use crate::content::Project;

use super::TextScramble;

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    get_projects().map_err(|err| {
        tracing::error!(%err, "couldn't load projects");
        ServerFnError::new(err.to_string())
    })
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let projects = Resource::new(|| (), |_| get_projects_server());

    view! {
        <div class="max-w-7xl mx-auto">
            <h2 class="text-3xl font-bold mb-12 font-mono">
                <TextScramble text="Key Projects" />
            </h2>
            <Suspense fallback=move || {
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <div class="h-48 rounded-lg bg-gray-800/30 animate-pulse"></div>
                        <div class="h-48 rounded-lg bg-gray-800/30 animate-pulse"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    match projects.await {
                        Ok(projects) => {
                            Either::Left(
                                view! {
                                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                        {projects
                                            .into_iter()
                                            .map(|project| view! { <ProjectCard project /> })
                                            .collect_view()}
                                    </div>
                                },
                            )
                        }
                        Err(err) => {
                            Either::Right(
                                view! {
                                    <p class="text-red-400">{format!("Couldn't load projects: {err}")}</p>
                                },
                            )
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="bg-gray-800/30 rounded-lg p-6 border border-gray-700/50 transition-transform duration-300 hover:scale-105 project-card">
            <div class="text-blue-400 text-3xl mb-4">
                <i class="extra-code" />
            </div>
            <h3 class="text-xl font-semibold mb-3">{project.title}</h3>
            <div class="text-gray-400 mb-4" inner_html=project.description_html></div>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tags
                    .into_iter()
                    .map(|tag| {
                        view! {
                            <span class="text-sm bg-blue-500/10 text-blue-300 px-3 py-1 rounded-full">
                                {tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <a
                href=project.link
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center text-blue-400 hover:text-blue-300 hover:translate-x-1 transition-transform"
            >
                "View Project "
                <i class="extra-external-link ml-1" />
            </a>
        </div>
    }
}
