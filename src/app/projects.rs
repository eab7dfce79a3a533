use leptos::prelude::*;

use crate::content::{Project, SITE_CONTENT};
use crate::progress::stagger_delay;

use super::reveal::Reveal;

const PROJECT_STAGGER_MS: u32 = 200;

#[component]
pub fn Projects() -> impl IntoView {
    let projects = &SITE_CONTENT.projects;
    view! {
        <section id="projects" class="py-20 bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">
                        "Featured "
                        <span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                            "Projects"
                        </span>
                    </h2>
                    <p class="text-xl text-gray-300 max-w-3xl mx-auto leading-relaxed">
                        "A showcase of my recent work, demonstrating my ability to create functional, beautiful, and user-friendly applications."
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-3 gap-8">
                    {projects
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <ProjectCard
                                    project
                                    delay_ms=stagger_delay(index, PROJECT_STAGGER_MS)
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal class="mt-16 text-center" delay_ms=600>
                    <div class="bg-gray-800/50 backdrop-blur-sm border border-gray-700 rounded-xl p-8">
                        <h3 class="text-2xl font-bold text-white mb-4">
                            "Want to see more projects?"
                        </h3>
                        <p class="text-gray-300 mb-6">
                            "Check out my GitHub profile for more projects and contributions to the open-source community."
                        </p>
                        <a
                            href=projects.profile_link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 px-6 py-3 bg-gray-700 text-white rounded-lg font-medium hover:bg-gray-600 hover:scale-105 transition-all duration-300"
                        >
                            <i class="devicon-github-plain" />
                            "View GitHub Profile"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal
            delay_ms
            class="bg-gray-800/50 backdrop-blur-sm rounded-xl border border-gray-700 overflow-hidden hover:border-blue-400/50 group"
        >
            <div class="relative overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    loading="lazy"
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-300"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-gray-900/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
                <div class="absolute top-4 left-4 p-3 bg-gray-900/80 backdrop-blur-sm rounded-full border border-gray-600">
                    <i class=format!("{} text-2xl text-blue-400", project.icon) />
                </div>
            </div>

            <div class="p-6">
                <h3 class="text-xl font-bold text-white mb-3">{project.title.clone()}</h3>
                <p class="text-gray-300 mb-4 leading-relaxed">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-gray-700/50 border border-gray-600 text-gray-300 rounded-full text-sm font-medium">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.demo_link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-blue-500 to-purple-500 text-white rounded-lg font-medium hover:from-blue-600 hover:to-purple-600 hover:scale-105 transition-all duration-300"
                    >
                        <i class="extra-external-link" />
                        "Demo"
                    </a>
                    <a
                        href=project.github_link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 px-4 py-2 border-2 border-gray-600 text-gray-300 rounded-lg font-medium hover:border-blue-400 hover:text-blue-400 hover:scale-105 transition-all duration-300"
                    >
                        <i class="devicon-github-plain" />
                        "Code"
                    </a>
                </div>
            </div>
        </Reveal>
    }
}
