//! The page's content sections, assembled from the static arrays in
//! `crate::content`. Sections reveal on first viewport entry; the skill bars
//! additionally stagger their fill animation per bar.

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::content;
use crate::decor::FloatingImage;
use crate::driver::{self, Motion, TargetHandle};
use crate::magnetic::MagneticButton;
use crate::motion::{Property, TweenSpec, Value};
use crate::reveal::{observe_once, stagger_delay, ImageReveal, Reveal, RevealObserver, STAGGER_STEP_SECS};

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <Reveal id="home" class="hero-section">
            <div class="hero-copy">
                <span class="badge">{"Available for hire"}</span>
                <h1 class="hero-title">
                    {"I'm "}
                    <span class="text-primary">{content::OWNER_NAME}</span>
                </h1>
                <h3 class="hero-designation">{content::DESIGNATION}</h3>
                <p class="hero-lede">
                    {"Crafting digital experiences that "}
                    <span class="text-primary">{"matter"}</span>
                    {". Specialized in MERN Stack Development."}
                </p>

                <div class="hero-actions">
                    <MagneticButton emphasized=true class="btn-primary">
                        <span class="material-symbols-outlined">{"chat_bubble"}</span>
                        {" Let's Talk"}
                    </MagneticButton>
                    <a
                        class="btn-ghost"
                        href={content::RESUME_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span class="material-symbols-outlined">{"download"}</span>
                        {" Download CV"}
                    </a>
                </div>

                <div class="social-row">
                    { for content::HERO_SOCIALS.iter().map(|social| html! {
                        <a
                            class="social-pill"
                            href={social.url}
                            target="_blank"
                            rel="noopener noreferrer"
                            title={social.name}
                        >
                            <span class="material-icons-round">{social.icon}</span>
                        </a>
                    }) }
                </div>

                <div class="stats-row">
                    { for content::HERO_STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <h3>{stat.value}</h3>
                            <p>{stat.label}</p>
                        </div>
                    }) }
                </div>
            </div>

            <div class="hero-portrait">
                <div class="portrait-glow"></div>
                <FloatingImage class="portrait-frame">
                    <ImageReveal>
                        <img
                            src={content::PORTRAIT_URL}
                            alt={format!("{} professional portrait", content::OWNER_NAME)}
                        />
                    </ImageReveal>
                </FloatingImage>
                <div class="status-dot"></div>
            </div>
        </Reveal>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <Reveal id="about" class="about-section">
            <div class="about-portrait">
                <div class="about-outline"></div>
                <FloatingImage intensity={0.8} class="about-frame">
                    <ImageReveal delay={0.2}>
                        <img src={content::ABOUT_PORTRAIT_URL} alt="Portrait" />
                    </ImageReveal>
                    <div class="about-chip">
                        <span class="about-chip-value">{"8+"}</span>
                        <p>{"Months Learning Experience"}</p>
                    </div>
                </FloatingImage>
            </div>

            <div class="about-copy">
                <span class="eyebrow with-rule">{"About Me"}</span>
                <h2>
                    {"Inspiring The "}
                    <span class="gradient-text-pink">{"Marvelous"}</span>
                    {" "}
                    <span class="gradient-text-purple">{"Project"}</span>
                </h2>

                <p>
                    {"I'm "}<strong>{content::OWNER_NAME}</strong>
                    {". My programming journey began with a simple curiosity about how \
                      websites work. What started as exploring HTML has now evolved into a \
                      full-blown passion for the "}
                    <span class="text-primary">{"MERN Stack"}</span>
                    {", where I love turning complex problems into simple, beautiful, and \
                      intuitive designs."}
                </p>
                <p>
                    {"I truly enjoy crafting "}<strong>{"interactive user interfaces"}</strong>
                    {" and building robust backends. There's a certain thrill in optimizing \
                      code and seeing a project come to life, ensuring it's not just \
                      functional but also lightning-fast."}
                </p>
                <p>
                    {"Beyond the world of syntax and servers, I'm an enthusiast of "}
                    <span class="text-secondary">{"Cricket"}</span>
                    {" and I love "}
                    <span class="text-secondary">{"Traveling"}</span>
                    {" to new places. These hobbies help me stay creative and bring a fresh \
                      perspective to my development work."}
                </p>

                <div class="trait-grid">
                    { for content::ABOUT_TRAITS.iter().map(|card| html! {
                        <div class="trait-card">
                            <span class="material-icons-round">{card.icon}</span>
                            <span class="trait-text">{card.text}</span>
                        </div>
                    }) }
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(EducationSection)]
pub fn education_section() -> Html {
    html! {
        <section id="education" class="education-section">
            <div class="section-heading">
                <h3 class="eyebrow">{"Learning Journey"}</h3>
                <h1>
                    {"Educational "}
                    <span class="gradient-text-pink">{"Qualification"}</span>
                </h1>
            </div>

            <div class="education-list">
                { for content::EDUCATION.iter().enumerate().map(|(index, entry)| html! {
                    <Reveal
                        tag="div"
                        class="education-card"
                        shift_x={-50.0}
                        shift_y={0.0}
                        duration={0.5}
                        delay={stagger_delay(index, STAGGER_STEP_SECS)}
                        margin="0px"
                    >
                        <div class="education-dot"></div>
                        <div class="education-head">
                            <div>
                                <h2>{entry.degree}</h2>
                                <p class="education-institution">{entry.institution}</p>
                                <div class="education-department">
                                    <span class="material-icons-round">{"account_tree"}</span>
                                    <p>{entry.department}</p>
                                </div>
                            </div>
                            <span class="education-duration">{entry.duration}</span>
                        </div>
                        <p class="education-description">{entry.description}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

const BAR_FILL_SECS: f64 = 1.2;
const BAR_BASE_DELAY_SECS: f64 = 0.3;
const LABEL_FADE_SECS: f64 = 0.5;
const LABEL_BASE_DELAY_SECS: f64 = 0.8;

#[function_component(SkillBars)]
fn skill_bars() -> Html {
    let motion = use_context::<Motion>();
    let section_ref = use_node_ref();
    let animate = use_state(|| !driver::prefers_reduced_motion());
    let bar_refs = use_memo((), |_| {
        (0..content::SKILLS.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let label_refs = use_memo((), |_| {
        (0..content::SKILLS.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });

    {
        let section_ref = section_ref.clone();
        let bar_refs = bar_refs.clone();
        let label_refs = label_refs.clone();
        use_effect_with((motion.clone(), *animate), move |(motion, animate)| {
            let mut runtime: Option<(Vec<TargetHandle>, Option<RevealObserver>)> = None;
            if *animate {
                if let (Some(motion), Some(section)) =
                    (motion.clone(), section_ref.cast::<HtmlElement>())
                {
                    let mut handles = Vec::new();
                    let mut pending: Vec<(TargetHandle, TweenSpec)> = Vec::new();

                    for (index, skill) in content::SKILLS.iter().enumerate() {
                        if let Some(bar) = bar_refs[index].cast::<HtmlElement>() {
                            let handle = motion
                                .register_seeded(&bar, &[(Property::Width, Value::Scalar(0.0))]);
                            pending.push((
                                handle.clone(),
                                TweenSpec::to(
                                    vec![(Property::Width, Value::Scalar(f64::from(skill.percentage)))],
                                    BAR_FILL_SECS,
                                )
                                .with_delay(
                                    BAR_BASE_DELAY_SECS + stagger_delay(index, STAGGER_STEP_SECS),
                                ),
                            ));
                            handles.push(handle);
                        }
                        if let Some(label) = label_refs[index].cast::<HtmlElement>() {
                            let handle = motion
                                .register_seeded(&label, &[(Property::Opacity, Value::Scalar(0.0))]);
                            pending.push((
                                handle.clone(),
                                TweenSpec::to(
                                    vec![(Property::Opacity, Value::Scalar(1.0))],
                                    LABEL_FADE_SECS,
                                )
                                .with_delay(
                                    LABEL_BASE_DELAY_SECS + stagger_delay(index, STAGGER_STEP_SECS),
                                ),
                            ));
                            handles.push(handle);
                        }
                    }

                    let observer = observe_once(&section, "-100px", move || {
                        for (handle, spec) in pending.drain(..) {
                            handle.play(spec);
                        }
                    });
                    runtime = Some((handles, observer));
                }
            }
            move || {
                if let Some((handles, _observer)) = runtime {
                    for handle in handles {
                        handle.release();
                    }
                }
            }
        });
    }

    html! {
        <div ref={section_ref} class="skill-bars">
            <h3 class="panel-title rule-pink">{"Technical Skills"}</h3>
            <div class="skill-list">
                { for content::SKILLS.iter().enumerate().map(|(index, skill)| {
                    let final_width = format!("width: {}%;", skill.percentage);
                    html! {
                        <div class="skill">
                            <div class="skill-head">
                                <span class="skill-name">{skill.name}</span>
                                <span
                                    ref={label_refs[index].clone()}
                                    class="skill-percentage"
                                    style={(!*animate).then_some("opacity: 1;")}
                                >
                                    {format!("{}%", skill.percentage)}
                                </span>
                            </div>
                            <div class="skill-track">
                                <div
                                    ref={bar_refs[index].clone()}
                                    class="skill-bar"
                                    style={(!*animate).then(|| final_width.clone())}
                                ></div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    html! {
        <Reveal id="skills" class="skills-section">
            <div class="section-heading">
                <h2 class="eyebrow">{"What I Do"}</h2>
                <h1>
                    {"Empowering "}
                    <span class="gradient-text-pink">{"Creativity"}</span>
                    <br />
                    <span class="gradient-text-purple">{"Through"}</span>
                </h1>
            </div>

            <div class="skills-grid">
                <SkillBars />

                <div id="services" class="services">
                    <h3 class="panel-title rule-purple">{"Services"}</h3>
                    { for content::SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <span class="service-number">{service.number}</span>
                            <div>
                                <h4>{service.title}</h4>
                                <p>{service.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="tech-chips">
                { for content::TECH_STACK.iter().map(|tech| html! {
                    <span class="tech-chip">{*tech}</span>
                }) }
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    index: usize,
    on_close: Callback<MouseEvent>,
}

const MODAL_HIDDEN_SCALE: f64 = 0.9;
const MODAL_HIDDEN_SHIFT_PX: f64 = 50.0;
const MODAL_ENTER_SECS: f64 = 0.3;

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let motion = use_context::<Motion>();
    let box_ref = use_node_ref();

    {
        let box_ref = box_ref.clone();
        use_effect_with(motion.clone(), move |motion| {
            let mut runtime: Option<TargetHandle> = None;
            if let (Some(motion), Some(element)) = (motion.clone(), box_ref.cast::<HtmlElement>())
            {
                let handle = motion.register_seeded(
                    &element,
                    &[
                        (Property::Opacity, Value::Scalar(0.0)),
                        (Property::Scale, Value::Scalar(MODAL_HIDDEN_SCALE)),
                        (Property::TranslateY, Value::Scalar(MODAL_HIDDEN_SHIFT_PX)),
                    ],
                );
                handle.play(TweenSpec::to(
                    vec![
                        (Property::Opacity, Value::Scalar(1.0)),
                        (Property::Scale, Value::Scalar(1.0)),
                        (Property::TranslateY, Value::Scalar(0.0)),
                    ],
                    MODAL_ENTER_SECS,
                ));
                runtime = Some(handle);
            }
            move || {
                if let Some(handle) = runtime {
                    handle.release();
                }
            }
        });
    }

    let Some(project) = content::PROJECTS.get(props.index) else {
        return Html::default();
    };

    let stop_bubble = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="modal-layer">
            <div class="modal-overlay" onclick={props.on_close.clone()}></div>
            <div ref={box_ref} class="modal-box" onclick={stop_bubble}>
                <button class="modal-close" onclick={props.on_close.clone()}>
                    <span class="material-icons-round">{"close"}</span>
                </button>

                <img class="modal-image" src={project.image} alt={project.title} />
                <h2>{project.title}</h2>
                <p class="modal-description">{project.description}</p>

                <div class="modal-block">
                    <h4 class="modal-label text-primary">{"Main Technologies"}</h4>
                    <div class="modal-chips">
                        { for project.tech_stack.iter().map(|tech| html! {
                            <span class="modal-chip">{*tech}</span>
                        }) }
                    </div>
                </div>

                <div class="modal-block">
                    <h4 class="modal-label text-secondary">{"Challenges Faced"}</h4>
                    <p>{project.challenges}</p>
                </div>

                <div class="modal-block">
                    <h4 class="modal-label text-accent">{"Future Plans"}</h4>
                    <p>{project.future_plans}</p>
                </div>

                <div class="modal-links">
                    <a
                        class="btn-primary"
                        href={project.live_url}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Live Project "}
                        <span class="material-icons-round">{"open_in_new"}</span>
                    </a>
                    <a
                        class="btn-ghost"
                        href={project.repo_url}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"GitHub Client "}
                        <span class="material-icons-round">{"code"}</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    let selected = use_state(|| Option::<usize>::None);

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    html! {
        <Reveal id="projects" class="portfolio-section">
            <div class="portfolio-glow"></div>

            <div class="section-heading">
                <p class="eyebrow">{"Portfolio"}</p>
                <h1>
                    {"Transforming "}
                    <span class="gradient-text-pink">{"Ideas"}</span>
                    {" Into Experiences"}
                </h1>
            </div>

            <div class="projects-grid">
                { for content::PROJECTS.iter().enumerate().map(|(index, project)| {
                    let open = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(index)))
                    };
                    html! {
                        <article class="project-card">
                            <div class="project-media">
                                <img src={project.image} alt={project.title} />
                            </div>
                            <div class="project-body">
                                <span class="project-category">{project.category}</span>
                                <h2>{project.title}</h2>
                                <p>{project.description}</p>
                                <div class="project-actions">
                                    <a
                                        class="btn-small"
                                        href={project.live_url}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {"Live Link"}
                                    </a>
                                    <button class="btn-small ghost" onclick={open}>
                                        {"View More"}
                                    </button>
                                </div>
                            </div>
                        </article>
                    }
                }) }
            </div>

            if let Some(index) = *selected {
                <ProjectModal index={index} on_close={on_close} />
            }
        </Reveal>
    }
}
