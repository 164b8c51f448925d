use js_sys::Math;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    console, window, CanvasRenderingContext2d, Document, Element, Event, EventTarget,
    HtmlCanvasElement, HtmlElement, HtmlHeadElement, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};
use yew::prelude::*;

use crate::content::{
    self, ExperienceEntry, NavigationItem, ProjectEntry, SocialIcon, SocialLink, ABOUT_PARAGRAPHS,
    ABOUT_SECTION, EXPERIENCES, EXPERIENCE_SECTION, HEADLINE, NAVIGATION_ITEMS, OWNER_NAME,
    PROJECTS, PROJECTS_SECTION, RESUME_LABEL, RESUME_PATH, SOCIAL_LINKS, TAGLINE,
};
use crate::metadata::{self, MetaTag};
use crate::particles::{FrameLimiter, ParticleField, ParticleOptions};
use crate::scroll_spy::{
    self, ScrollEvents, ScrollSpy, SectionExtent, SectionLayout, SectionTargets,
};

/// An event listener that unregisters itself when dropped.
struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    fn new(target: EventTarget, event: &'static str, callback: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());

        Self {
            target,
            event,
            callback,
        }
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

struct WindowScroll {
    window: Window,
}

impl ScrollEvents for WindowScroll {
    type Listener = DomListener;

    fn listen(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> DomListener {
        let window = self.window.clone();
        DomListener::new(self.window.clone().into(), "scroll", move |_| {
            on_scroll(window.scroll_y().unwrap_or(0.0));
        })
    }
}

/// Page sections as laid out in the live document.
struct DocumentSections {
    document: Document,
}

impl DocumentSections {
    fn current() -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document })
    }
}

impl SectionLayout for DocumentSections {
    fn section_extent(&self, id: &str) -> Option<SectionExtent> {
        let element = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;

        Some(SectionExtent::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

impl SectionTargets for DocumentSections {
    type Target = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn smooth_scroll(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn watch_window_scroll(on_change: impl Fn(&'static str) + 'static) -> Option<DomListener> {
    let events = WindowScroll { window: window()? };
    let sections = DocumentSections::current()?;
    let spy = ScrollSpy::new(content::section_ids());

    Some(scroll_spy::watch(&events, sections, spy, on_change))
}

fn navigate_to_section(id: &str) {
    if let Some(sections) = DocumentSections::current() {
        scroll_spy::scroll_to_section(&sections, id);
    }
}

#[hook]
fn use_scroll_spy() -> &'static str {
    let active = use_state(content::default_section);

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let listener = watch_window_scroll(move |id| active.set(id));
            move || drop(listener)
        });
    }

    *active
}

fn viewport_size(win: &Window) -> (f64, f64) {
    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn pixel_ratio(win: &Window) -> f64 {
    let ratio = win.device_pixel_ratio();
    if ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

fn resize_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64, ratio: f64) {
    canvas.set_width((width * ratio).round() as u32);
    canvas.set_height((height * ratio).round() as u32);
}

fn rgba(color: &str, alpha: f64) -> String {
    format!("rgba({color}, {alpha:.3})")
}

fn draw_field(context: &CanvasRenderingContext2d, field: &ParticleField, ratio: f64) {
    let (width, height) = field.size();
    let options = field.options();

    let _ = context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
    context.set_fill_style_str(options.background);
    context.fill_rect(0.0, 0.0, width, height);

    context.set_line_width(1.0);
    for link in field.links().into_iter().chain(field.pointer_links()) {
        context.set_stroke_style_str(&rgba(options.color, link.opacity));
        context.begin_path();
        context.move_to(link.from.0, link.from.1);
        context.line_to(link.to.0, link.to.1);
        context.stroke();
    }

    for particle in field.particles() {
        context.set_fill_style_str(&rgba(options.color, particle.opacity));
        context.begin_path();
        let _ = context.arc(particle.x, particle.y, particle.radius, 0.0, TAU);
        context.fill();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Animation loop plus the listeners feeding it. Dropping the engine cancels
/// the pending frame and detaches everything.
struct ParticleEngine {
    window: Window,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    _listeners: Vec<DomListener>,
}

impl ParticleEngine {
    fn start(canvas_ref: &NodeRef) -> Result<Self, &'static str> {
        let win = window().ok_or("window unavailable")?;
        let canvas = canvas_ref
            .cast::<HtmlCanvasElement>()
            .ok_or("canvas is not mounted")?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or("2d context unavailable")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context unavailable")?;

        let options = ParticleOptions::default();
        let ratio = Rc::new(Cell::new(pixel_ratio(&win)));
        let (width, height) = viewport_size(&win);
        resize_canvas(&canvas, width, height, ratio.get());

        let field = Rc::new(RefCell::new(ParticleField::new(
            width,
            height,
            options,
            &mut Math::random,
        )));

        let on_resize = {
            let win = win.clone();
            let field = field.clone();
            let ratio = ratio.clone();
            DomListener::new(win.clone().into(), "resize", move |_| {
                let (width, height) = viewport_size(&win);
                ratio.set(pixel_ratio(&win));
                resize_canvas(&canvas, width, height, ratio.get());
                field.borrow_mut().resize(width, height, &mut Math::random);
            })
        };

        let on_pointer_move = {
            let field = field.clone();
            DomListener::new(win.clone().into(), "mousemove", move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let pointer = (f64::from(event.client_x()), f64::from(event.client_y()));
                    field.borrow_mut().set_pointer(Some(pointer));
                }
            })
        };

        let on_pointer_out = {
            let field = field.clone();
            DomListener::new(win.clone().into(), "mouseout", move |event: Event| {
                let left_window = event
                    .dyn_ref::<MouseEvent>()
                    .is_some_and(|event| event.related_target().is_none());
                if left_window {
                    field.borrow_mut().set_pointer(None);
                }
            })
        };

        let frame: FrameCallback = Rc::default();
        let frame_id = Rc::new(Cell::new(None));
        {
            let next_frame = frame.clone();
            let frame_id = frame_id.clone();
            let win = win.clone();
            let mut limiter = FrameLimiter::new(options.fps_limit);

            *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
                if let Some(frames) = limiter.admit(now) {
                    let mut field = field.borrow_mut();
                    field.step(frames);
                    draw_field(&context, &field, ratio.get());
                }

                if let Some(callback) = next_frame.borrow().as_ref() {
                    frame_id.set(
                        win.request_animation_frame(callback.as_ref().unchecked_ref())
                            .ok(),
                    );
                }
            }));
        }

        if let Some(callback) = frame.borrow().as_ref() {
            frame_id.set(
                win.request_animation_frame(callback.as_ref().unchecked_ref())
                    .ok(),
            );
        }

        Ok(Self {
            window: win,
            frame,
            frame_id,
            _listeners: vec![on_resize, on_pointer_move, on_pointer_out],
        })
    }
}

impl Drop for ParticleEngine {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // the frame closure holds a handle to itself
        self.frame.borrow_mut().take();
    }
}

#[function_component(ParticlesBackground)]
fn particles_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let engine: Rc<RefCell<Option<ParticleEngine>>> = Rc::default();
            let mounted = Rc::new(Cell::new(true));

            {
                let engine = engine.clone();
                let mounted = mounted.clone();
                spawn_local(async move {
                    if !mounted.get() {
                        return;
                    }

                    match ParticleEngine::start(&canvas_ref) {
                        Ok(started) => *engine.borrow_mut() = Some(started),
                        Err(reason) => console::warn_1(&JsValue::from_str(&format!(
                            "particle background disabled: {reason}"
                        ))),
                    }
                });
            }

            move || {
                mounted.set(false);
                engine.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas id="tsparticles" class="particles-background" ref={canvas_ref} aria-hidden="true" />
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum IconKind {
    Github,
    Mail,
    ExternalLink,
}

impl From<SocialIcon> for IconKind {
    fn from(icon: SocialIcon) -> Self {
        match icon {
            SocialIcon::Github => Self::Github,
            SocialIcon::Mail => Self::Mail,
        }
    }
}

#[derive(Properties, PartialEq)]
struct IconProps {
    kind: IconKind,
    #[prop_or_default]
    class: Classes,
}

#[function_component(Icon)]
fn icon(props: &IconProps) -> Html {
    let shapes = match props.kind {
        IconKind::Github => html! {
            <>
                <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
                <path d="M9 18c-4.51 2-5-2-7-2" />
            </>
        },
        IconKind::Mail => html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
        IconKind::ExternalLink => html! {
            <>
                <path d="M15 3h6v6" />
                <path d="M10 14 21 3" />
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
            </>
        },
    };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shapes}
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    item: NavigationItem,
    is_active: bool,
    on_select: Callback<&'static str>,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let onclick = {
        let id = props.item.id;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    html! {
        <li>
            <button
                type="button"
                class={classes!("nav-item", props.is_active.then_some("is-active"))}
                aria-current={props.is_active.then_some("location")}
                onclick={onclick}
            >
                <span class="nav-indicator" />
                <span class="nav-label">{props.item.label}</span>
            </button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct SocialLinkItemProps {
    link: SocialLink,
}

#[function_component(SocialLinkItem)]
fn social_link_item(props: &SocialLinkItemProps) -> Html {
    let link = props.link;

    html! {
        <li class="social-item">
            <a
                class="social-link"
                href={link.resolved_href()}
                target={link.target()}
                rel={link.rel()}
                aria-label={link.icon.label()}
            >
                <Icon kind={IconKind::from(link.icon)} />
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2>{props.title.clone()}</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TechTagProps {
    tech: &'static str,
}

#[function_component(TechTag)]
fn tech_tag(props: &TechTagProps) -> Html {
    html! {
        <li class="tech-tag">{props.tech}</li>
    }
}

#[derive(Properties, PartialEq)]
struct TechListProps {
    technologies: &'static [&'static str],
}

#[function_component(TechList)]
fn tech_list(props: &TechListProps) -> Html {
    html! {
        <ul class="tech-list" aria-label="Technologies used">
            { for props.technologies.iter().enumerate().map(|(index, tech)| html! {
                <TechTag key={index} tech={*tech} />
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceItemProps {
    entry: ExperienceEntry,
}

#[function_component(ExperienceItem)]
fn experience_item(props: &ExperienceItemProps) -> Html {
    let entry = props.entry;

    html! {
        <li class="entry experience-item">
            <div class="entry-card">
                <header class="entry-period">{entry.period}</header>
                <div class="entry-body">
                    <h3 class="entry-heading">
                        <div>
                            <a class="entry-link" href="#" target="_blank" rel="noreferrer">
                                <span>{entry.heading()}</span>
                                <Icon kind={IconKind::ExternalLink} class="entry-link-icon" />
                            </a>
                        </div>
                        { for entry.roles.iter().map(|role| html! {
                            <div class="entry-role" aria-hidden="true">{*role}</div>
                        }) }
                    </h3>
                    <p class="entry-description">{entry.description}</p>
                    <TechList technologies={entry.technologies} />
                </div>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectItemProps {
    project: ProjectEntry,
}

#[function_component(ProjectItem)]
fn project_item(props: &ProjectItemProps) -> Html {
    let project = props.project;

    html! {
        <li class="entry project-item">
            <div class="entry-card project-card">
                <div class="entry-body">
                    <h3 class="entry-heading">
                        <a
                            class="entry-link project-link"
                            href={project.link}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <span>{project.title}</span>
                            <Icon kind={IconKind::ExternalLink} class="entry-link-icon" />
                        </a>
                    </h3>
                    <p class="entry-description">{project.description}</p>
                    <TechList technologies={project.technologies} />
                </div>
                <img
                    class="project-image"
                    alt={project.title}
                    src={project.image}
                    loading="lazy"
                    decoding="async"
                    width="200"
                    height="48"
                />
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct ExternalLinkButtonProps {
    href: AttrValue,
    #[prop_or_default]
    children: Html,
}

#[function_component(ExternalLinkButton)]
fn external_link_button(props: &ExternalLinkButtonProps) -> Html {
    html! {
        <a class="external-button" href={props.href.clone()} target="_blank" rel="noreferrer">
            <span class="external-button-label">{props.children.clone()}</span>
            <Icon kind={IconKind::ExternalLink} class="entry-link-icon" />
        </a>
    }
}

#[function_component(Portfolio)]
fn portfolio() -> Html {
    let active_section = use_scroll_spy();
    let on_navigate = Callback::from(|id: &'static str| navigate_to_section(id));

    html! {
        <div class="page">
            <ParticlesBackground />
            <div class="layout">
                <header class="hero-column">
                    <div class="hero">
                        <div>
                            <h1 class="hero-name">{OWNER_NAME}</h1>
                            <h2 class="hero-headline">{HEADLINE}</h2>
                            <p class="hero-tagline">{TAGLINE}</p>
                            <nav class="nav" aria-label="In-page jump links">
                                <ul class="nav-list">
                                    { for NAVIGATION_ITEMS.iter().map(|item| html! {
                                        <NavItem
                                            key={item.id}
                                            item={*item}
                                            is_active={active_section == item.id}
                                            on_select={on_navigate.clone()}
                                        />
                                    }) }
                                </ul>
                            </nav>
                        </div>
                        <ul class="social-list" aria-label="Social media">
                            { for SOCIAL_LINKS.iter().enumerate().map(|(index, link)| html! {
                                <SocialLinkItem key={index} link={*link} />
                            }) }
                        </ul>
                    </div>
                </header>

                <main class="content-column">
                    <section id={ABOUT_SECTION} class="content-section">
                        <SectionHeader title="About" />
                        <div>
                            { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                                <p class="about-paragraph">{*paragraph}</p>
                            }) }
                        </div>
                    </section>

                    <section id={EXPERIENCE_SECTION} class="content-section">
                        <SectionHeader title="Experience" />
                        <div>
                            <ol class="entry-list">
                                { for EXPERIENCES.iter().enumerate().map(|(index, entry)| html! {
                                    <ExperienceItem key={index} entry={*entry} />
                                }) }
                            </ol>
                            <div class="entry-footer">
                                <ExternalLinkButton href={RESUME_PATH}>{RESUME_LABEL}</ExternalLinkButton>
                            </div>
                        </div>
                    </section>

                    <section id={PROJECTS_SECTION} class="content-section">
                        <SectionHeader title="Projects" />
                        <div>
                            <ul class="entry-list">
                                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                                    <ProjectItem key={index} project={*project} />
                                }) }
                            </ul>
                        </div>
                    </section>
                </main>
            </div>
        </div>
    }
}

fn ensure_meta_tag(document: &Document, head: &HtmlHeadElement, tag: &MetaTag) {
    let selector = format!("meta[{}=\"{}\"]", tag.key.attribute(), tag.key.value());
    if document.query_selector(&selector).ok().flatten().is_some() {
        return;
    }

    let Ok(element) = document.create_element("meta") else {
        return;
    };
    let _ = element.set_attribute(tag.key.attribute(), tag.key.value());
    let _ = element.set_attribute("content", &tag.content);
    let _ = head.append_child(&element);
}

/// Adds whatever head metadata the served shell is missing.
fn apply_document_metadata() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    document.set_title(metadata::TITLE);

    let Some(head) = document.head() else {
        return;
    };

    for tag in metadata::head_tags(metadata::SITE_URL) {
        ensure_meta_tag(&document, &head, &tag);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn run() {
    apply_document_metadata();

    yew::Renderer::<Portfolio>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
