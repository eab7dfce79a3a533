use leptos::{html, prelude::*};
use leptos_use::{
    use_element_visibility, use_interval_fn_with_options, use_timeout_fn, utils::Pausable,
    UseIntervalFnOptions, UseTimeoutFnReturn,
};

use crate::content::{Palette, Skill, SkillCategory, TechBadge, SITE_CONTENT};
use crate::progress::{stagger_delay, ProgressAnimation, DEFAULT_DURATION_MS, STAGGER_STEP_MS};

use super::reveal::Reveal;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = &SITE_CONTENT.skills;
    view! {
        <section
            id="skills"
            class="min-h-screen bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 py-20 px-6"
        >
            <div class="max-w-7xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-5xl font-bold text-white mb-4">"Technology Stack"</h2>
                    <p class="text-xl text-slate-400 max-w-3xl mx-auto">
                        "The essential tools and technologies I use to build exceptional digital experiences"
                    </p>
                </Reveal>
                <div class="grid grid-cols-2 md:grid-cols-4 lg:grid-cols-8 gap-4 mb-20">
                    {skills.stack.iter().map(|badge| view! { <StackBadge badge /> }).collect_view()}
                </div>
                {skills
                    .categories
                    .iter()
                    .map(|category| view! { <CategorySection category /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StackBadge(badge: &'static TechBadge) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center p-4 rounded-xl bg-slate-800/50 border border-slate-700 hover:border-slate-500 hover:-translate-y-1 transition-all duration-300">
            <div class=format!("p-3 rounded-lg mb-3 {}", badge.color.solid_bg_class())>
                <i class=format!("{} text-2xl text-white", badge.icon) />
            </div>
            <span class="text-white font-medium text-sm text-center">{badge.name.clone()}</span>
        </div>
    }
}

#[component]
fn CategorySection(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <Reveal class="mb-16">
            <div class="flex items-center gap-4 mb-8">
                <div class=format!("p-3 rounded-xl {}", category.color.solid_bg_class())>
                    <i class=format!("{} text-2xl text-white", category.icon) />
                </div>
                <div>
                    <h3 class="text-3xl font-bold text-white">{category.title.clone()}</h3>
                    <p class="text-slate-400">{format!("{} skills", category.skills.len())}</p>
                </div>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(index, skill)| {
                        view! { <SkillCard skill delay_ms=stagger_delay(index, STAGGER_STEP_MS) /> }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, delay_ms: u32) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl bg-slate-800/50 border border-slate-700 hover:border-slate-500 transition-all duration-300">
            <div class="flex items-start gap-4 mb-4">
                <div class=format!("p-3 rounded-lg {}", skill.color.solid_bg_class())>
                    <i class=format!("{} text-xl text-white", skill.icon) />
                </div>
                <div>
                    <h4 class="text-lg font-semibold text-white">{skill.name.clone()}</h4>
                    <p class="text-sm text-slate-400">{skill.description.clone()}</p>
                </div>
            </div>
            <ProgressBar percentage=skill.percentage color=skill.color delay_ms />
        </div>
    }
}

/// Bar that fills from 0 to `percentage` the first time it scrolls into view.
#[component]
pub fn ProgressBar(
    percentage: f64,
    color: Palette,
    #[prop(optional)] delay_ms: u32,
    #[prop(default = DEFAULT_DURATION_MS)] duration_ms: u32,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let is_visible = use_element_visibility(el);
    let animation = RwSignal::new(ProgressAnimation::new(percentage, duration_ms));
    let tick_ms = animation.with_untracked(|a| a.tick_interval_ms().round().max(1.0) as u64);

    // interval and timeout are both cleared when the bar is disposed
    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            animation.update(|a| {
                a.tick();
            })
        },
        tick_ms,
        UseIntervalFnOptions::default().immediate(false),
    );
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(move |_: ()| resume(), delay_ms as f64);

    Effect::watch(
        move || animation.with(|a| a.is_complete()),
        move |done, _, _| {
            if *done {
                pause();
            }
        },
        false,
    );

    Effect::new(move |_| {
        if !is_visible.get() {
            return;
        }
        let mut start_timer = false;
        animation.update(|a| start_timer = a.trigger());
        if start_timer {
            start(());
        }
    });

    let (from, to) = color.gradient();
    view! {
        <div node_ref=el class="w-full">
            <div class="flex justify-between text-sm mb-2">
                <span class="text-slate-400">"Proficiency"</span>
                <span class="text-white font-semibold">
                    {move || format!("{}%", animation.with(|a| a.display_value()))}
                </span>
            </div>
            <div class="w-full h-2 bg-slate-700 rounded-full overflow-hidden">
                <div
                    class="h-full rounded-full"
                    style=move || {
                        format!(
                            "width: {:.2}%; background: linear-gradient(90deg, {from} 0%, {to} 100%)",
                            animation.with(|a| a.current()),
                        )
                    }
                ></div>
            </div>
        </div>
    }
}
