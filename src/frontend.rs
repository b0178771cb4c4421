//! Application root: theme mode, glass header, footer, and the section
//! stack. The shared animation driver is created here and handed to every
//! controller through context.

use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::contact::ContactSection;
use crate::content;
use crate::cursor::CustomCursor;
use crate::decor::FloatingShapes;
use crate::driver::{self, Motion, TargetHandle};
use crate::magnetic::MagneticButton;
use crate::motion::{Property, TweenSpec, Value};
use crate::reveal::Reveal;
use crate::sections::{
    AboutSection, EducationSection, HeroSection, PortfolioSection, SkillsSection,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Material icon for the mode the toggle switches to.
    fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "dark_mode",
            Self::Dark => "light_mode",
        }
    }
}

fn system_prefers_light() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// The page is designed dark-first; only an explicit light preference from
/// the host flips the initial mode. Not persisted anywhere.
fn initial_theme() -> Theme {
    if system_prefers_light() {
        Theme::Light
    } else {
        Theme::Dark
    }
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

const HEADER_DROP_PX: f64 = -100.0;
const HEADER_ENTER_SECS: f64 = 0.8;

#[function_component(Header)]
fn header() -> Html {
    let motion = use_context::<Motion>();
    let header_ref = use_node_ref();
    let animate = use_state(|| !driver::prefers_reduced_motion());

    {
        let header_ref = header_ref.clone();
        use_effect_with((motion.clone(), *animate), move |(motion, animate)| {
            let mut runtime: Option<TargetHandle> = None;
            if *animate {
                if let (Some(motion), Some(element)) =
                    (motion.clone(), header_ref.cast::<HtmlElement>())
                {
                    let handle = motion.register_seeded(
                        &element,
                        &[
                            (Property::Opacity, Value::Scalar(0.0)),
                            (Property::TranslateY, Value::Scalar(HEADER_DROP_PX)),
                        ],
                    );
                    handle.play(TweenSpec::to(
                        vec![
                            (Property::Opacity, Value::Scalar(1.0)),
                            (Property::TranslateY, Value::Scalar(0.0)),
                        ],
                        HEADER_ENTER_SECS,
                    ));
                    runtime = Some(handle);
                }
            }
            move || {
                if let Some(handle) = runtime {
                    handle.release();
                }
            }
        });
    }

    html! {
        <header ref={header_ref} class="site-header">
            <div class="header-inner">
                <div class="brand">
                    <div class="brand-mark">
                        <span class="material-symbols-outlined">{"grid_view"}</span>
                    </div>
                    <span class="brand-name">{content::BRAND}</span>
                </div>
                <nav class="site-nav">
                    { for content::NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href}>{link.label}</a>
                    }) }
                </nav>
                <MagneticButton class="btn-primary btn-header">
                    {"Hire Me"}
                </MagneticButton>
            </div>
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <Reveal tag="footer" class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <div class="brand">
                        <div class="brand-mark">
                            <span class="material-symbols-outlined">{"grid_view"}</span>
                        </div>
                        <span class="brand-name">{content::BRAND}</span>
                    </div>
                    <p>
                        {format!(
                            "{} — MERN Stack Developer. Creating seamless web experiences \
                             with React and modern technologies.",
                            content::OWNER_NAME
                        )}
                    </p>
                </div>

                <div class="footer-socials">
                    { for content::FOOTER_SOCIALS.iter().map(|social| html! {
                        <a
                            class="footer-social"
                            href={social.url}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <div class="footer-social-icon">
                                <span class="material-symbols-outlined">{social.icon}</span>
                            </div>
                            <span class="footer-social-name">{social.name}</span>
                        </a>
                    }) }
                </div>
            </div>

            <div class="footer-bottom">
                <p>
                    {format!("© {year} ")}
                    <strong class="text-primary">{content::OWNER_NAME}</strong>
                    {". Built with ❤️, Rust & Yew."}
                </p>
                <div class="availability">
                    <span class="pulse-dot"></span>
                    <span>{"Available for new opportunities"}</span>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(initial_theme);
    let motion = use_state(Motion::new);

    {
        let current = *theme;
        use_effect_with(current, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set((*theme).toggled()))
    };

    html! {
        <ContextProvider<Motion> context={(*motion).clone()}>
            <div class="page">
                <FloatingShapes />
                <CustomCursor />
                <Header />
                <main id="content" class="page-main">
                    <HeroSection />
                    <AboutSection />
                    <EducationSection />
                    <SkillsSection />
                    <PortfolioSection />
                    <ContactSection />
                </main>
                <Footer />
                <MagneticButton
                    class="theme-toggle"
                    onclick={on_toggle}
                    aria_label={(*theme).toggle_label()}
                >
                    <span class="material-icons-round">{(*theme).toggle_icon()}</span>
                </MagneticButton>
            </div>
        </ContextProvider<Motion>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting {} frontend", content::BRAND);

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
