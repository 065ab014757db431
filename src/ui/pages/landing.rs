//! Landing page component
//!
//! A single scrolling page for ReliefMate AI:
//! - Background gradients and floating orbs
//! - Sticky navigation with in-page anchors and the two outbound actions
//! - Hero with call-to-action links and an animated stack of example cards
//! - Problem, solution, how-it-works and demo sections
//! - Footer with copyright and repeated links
//!
//! All copy is static. Outbound targets come from the [`Links`] context, or
//! [`Links::default`] when none was provided.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::reveal::{noscript_fallback, reveal_class, stagger_style};
use crate::core::{
    DEMO_CONTACT_EMAIL, FEATURES, Feature, IconKind, Links, NAV_ENTRIES, PROBLEMS, PRODUCT_NAME,
    RevealOptions, STEPS, SectionId, Step, copyright_line, current_year, mailto,
};
use crate::ui::icon::Icon;

/// Stagger between sibling cards entering together
const CARD_STAGGER_MS: u32 = 120;

/// Stagger between list items revealed one after another
const LIST_STAGGER_MS: u32 = 80;

/// Outbound links for the current page.
pub fn use_links() -> Links {
    use_context::<Links>().unwrap_or_default()
}

/// Landing page component with scroll-triggered entrance animations
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <LandingStyles />

        <div class="min-h-screen w-full bg-slate-950 text-slate-100 overflow-x-hidden">
            <Background />
            <Header />

            <main>
                <Hero />
                <ProblemSection />
                <SolutionSection />
                <HowItWorksSection />
                <DemoSection />
            </main>

            <Footer />
        </div>

        <ScrollRevealScript />
    }
}

/// Page title shared by the document and social previews
const PAGE_TITLE: &str = "ReliefMate AI - AI-Powered Disaster Relief";

const PAGE_DESCRIPTION: &str = "AI-powered disaster relief assistant. Verified shelters, medical aid and helpline info in seconds, multilingual and accessible.";

/// Attribute that keys a `<meta>` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Name(&'static str),
    Property(&'static str),
}

/// Document and social preview meta tags.
///
/// No canonical URL or `og:url` is emitted: the page's own origin depends on
/// where it is deployed, and the outbound links point at other sites.
pub fn page_meta_tags() -> Vec<(MetaKey, &'static str)> {
    vec![
        (MetaKey::Name("description"), PAGE_DESCRIPTION),
        (
            MetaKey::Name("keywords"),
            "disaster relief, chatbot, shelters, emergency, helpline, AI assistant, NGO",
        ),
        (MetaKey::Property("og:type"), "website"),
        (MetaKey::Property("og:title"), PAGE_TITLE),
        (MetaKey::Property("og:description"), PAGE_DESCRIPTION),
        (MetaKey::Name("twitter:card"), "summary"),
        (MetaKey::Name("twitter:title"), PAGE_TITLE),
        (MetaKey::Name("twitter:description"), PAGE_DESCRIPTION),
    ]
}

/// JSON-LD description of the product
pub fn structured_data(links: &Links) -> serde_json::Value {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": PRODUCT_NAME,
        "applicationCategory": "UtilitiesApplication",
        "operatingSystem": "Web",
        "description": PAGE_DESCRIPTION,
        "url": &links.demo,
        "codeRepository": &links.repository,
    })
}

/// SEO meta tags for the landing route
#[component]
pub fn SeoMeta() -> impl IntoView {
    let structured_data = structured_data(&use_links()).to_string();

    view! {
        <Title text=PAGE_TITLE />

        {page_meta_tags()
            .into_iter()
            .map(|(key, content)| match key {
                MetaKey::Name(name) => view! { <Meta name=name content=content /> }.into_any(),
                MetaKey::Property(property) => {
                    view! { <Meta property=property content=content /> }.into_any()
                }
            })
            .collect_view()}

        <script type="application/ld+json" inner_html=structured_data></script>
    }
}

/// Link that opens in a new browsing context
#[component]
fn ExternalLink(
    href: String,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}

/// Decorative gradients and floating orbs behind the page
#[component]
fn Background() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10" aria-hidden="true">
            <div class="absolute inset-0 bg-[radial-gradient(60%_60%_at_50%_0%,rgba(56,189,248,0.25),transparent_70%)]"></div>
            <div class="absolute inset-0 bg-[radial-gradient(60%_60%_at_0%_100%,rgba(16,185,129,0.18),transparent_70%)]"></div>
            <div class="absolute inset-0 bg-[radial-gradient(60%_60%_at_100%_100%,rgba(168,85,247,0.16),transparent_70%)]"></div>
            <FloatingOrb class="w-[40vw] h-[40vw] left-[-10vw] top-[-10vw] bg-cyan-500/20" />
            <FloatingOrb class="w-[30vw] h-[30vw] right-[-10vw] bottom-[-10vw] bg-emerald-500/20" />
        </div>
    }
}

#[component]
fn FloatingOrb(class: &'static str) -> impl IntoView {
    let class = format!("relief-orb pointer-events-none absolute rounded-full blur-2xl {class}");
    view! { <div class=class></div> }
}

/// Sticky navigation bar
#[component]
fn Header() -> impl IntoView {
    let links = use_links();

    view! {
        <header class="sticky top-0 z-40 backdrop-blur supports-[backdrop-filter]:bg-slate-950/40">
            <div class="mx-auto max-w-7xl px-4 py-3 flex items-center justify-between">
                <a href=SectionId::Top.href() class="font-semibold tracking-tight text-lg">
                    "ReliefMate "<span class="text-cyan-400">"AI"</span>
                </a>

                <nav class="hidden md:flex gap-6 text-sm" aria-label="Sections">
                    {NAV_ENTRIES
                        .iter()
                        .map(|entry| {
                            view! {
                                <a href=entry.target.href() class="hover:text-cyan-300">
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex gap-2">
                    <ExternalLink
                        href=links.repository.clone()
                        class="px-3 py-2 rounded-xl bg-slate-800/60 hover:bg-slate-700 transition inline-flex items-center gap-2 text-sm"
                    >
                        <Icon kind=IconKind::Github class="w-4 h-4" />
                        "GitHub"
                    </ExternalLink>
                    <ExternalLink
                        href=links.demo.clone()
                        class="px-4 py-2 rounded-xl bg-cyan-500 hover:bg-cyan-400 text-slate-900 font-semibold inline-flex items-center gap-2 text-sm"
                    >
                        "Live Demo"
                        <Icon kind=IconKind::ArrowRight class="w-4 h-4" />
                    </ExternalLink>
                </div>
            </div>
        </header>
    }
}

/// Hero section: headline, calls to action and the example card stack
#[component]
fn Hero() -> impl IntoView {
    let links = use_links();

    view! {
        <section id=SectionId::Top.id() class="relative">
            <div class="mx-auto max-w-7xl px-4 py-20 md:py-28">
                <div class="grid md:grid-cols-2 gap-10 items-center">
                    <div class=reveal_class("reveal-up") style=stagger_style(0, CARD_STAGGER_MS)>
                        <span class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-slate-800/70 text-xs border border-slate-700">
                            <Icon kind=IconKind::Activity class="w-3.5 h-3.5 text-emerald-300" />
                            "Real\u{2011}time Relief Intelligence"
                        </span>
                        <h1 class="mt-4 text-4xl md:text-6xl font-extrabold leading-tight">
                            "AI\u{2011}Powered Disaster Relief, "
                            <span class="block text-cyan-300">"when every second counts."</span>
                        </h1>
                        <p class="mt-4 text-slate-300 max-w-xl">
                            "During floods, earthquakes and crises, ReliefMate AI delivers verified shelters, medical aid and helpline info in seconds \u{2014} multilingual and accessible."
                        </p>
                        <div class="mt-6 flex flex-wrap gap-3">
                            <ExternalLink
                                href=links.demo.clone()
                                class="px-5 py-3 rounded-2xl bg-cyan-500 hover:bg-cyan-400 text-slate-900 font-semibold inline-flex items-center gap-2"
                            >
                                "Try Live Demo"
                                <Icon kind=IconKind::ArrowRight />
                            </ExternalLink>
                            <a
                                href=SectionId::Features.href()
                                class="px-5 py-3 rounded-2xl bg-slate-800/70 hover:bg-slate-700 font-semibold inline-flex items-center gap-2"
                            >
                                "Explore Features"
                            </a>
                        </div>
                    </div>

                    <div class=reveal_class("reveal-up relative") style=stagger_style(1, CARD_STAGGER_MS)>
                        <HeroCards />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Example request, shelter and chat cards layered in the hero
#[component]
fn HeroCards() -> impl IntoView {
    view! {
        <div
            class="relief-card-left absolute -top-4 -left-6 w-64 h-40 rounded-2xl bg-slate-900/80 border border-slate-700 p-4 shadow-xl"
            aria-hidden="true"
        >
            <div class="text-xs text-slate-400">"Incoming request"</div>
            <div class="mt-2 text-sm">"\u{201c}Need medical help in Rajkot, insulin for 2 patients.\u{201d}"</div>
            <div class="mt-4 inline-flex items-center gap-2 text-emerald-300 text-xs">
                <Icon kind=IconKind::Shield class="w-4 h-4" />
                "Classified: Medical"
            </div>
        </div>

        <div
            class="relief-card-right absolute top-24 -right-6 w-64 h-40 rounded-2xl bg-slate-900/80 border border-slate-700 p-4 shadow-xl"
            aria-hidden="true"
        >
            <div class="text-xs text-slate-400">"Shelter locator"</div>
            <div class="mt-2 text-sm inline-flex items-center gap-2">
                <Icon kind=IconKind::MapPin class="w-4 h-4 text-cyan-300" />
                "Nearest relief camp: 2.1 km"
            </div>
            <div class="mt-2 text-xs text-slate-400">"Open \u{b7} Verified 10m ago"</div>
        </div>

        <div class="relief-card-chat relative z-10 w-full rounded-3xl bg-gradient-to-br from-slate-900 to-slate-800 border border-slate-700 p-6 shadow-2xl">
            <div class="text-sm text-slate-300">"ReliefMate Chat"</div>
            <div class="mt-3 rounded-xl bg-slate-900/80 border border-slate-700 p-3 text-sm">
                <div class="text-slate-400">"You"</div>
                <div>"Nearest shelter in my area?"</div>
            </div>
            <div class="mt-3 rounded-xl bg-slate-900/80 border border-slate-700 p-3 text-sm">
                <div class="text-cyan-300">"ReliefMate"</div>
                <div>"Verified shelter at Govt School, Ward 4. Capacity 120. Open now. Helpline: 108."</div>
            </div>
        </div>
    }
}

/// The challenge: three problem statements
#[component]
fn ProblemSection() -> impl IntoView {
    view! {
        <section id=SectionId::Problem.id() class="border-t border-slate-800/60">
            <div class="mx-auto max-w-7xl px-4 py-16">
                <div class=reveal_class("reveal-up grid md:grid-cols-3 gap-8")>
                    <div class="md:col-span-1">
                        <h2 class="text-2xl md:text-3xl font-bold">"The Challenge"</h2>
                        <p class="mt-3 text-slate-300">
                            "Disaster info is scattered and slow. Misinformation and language gaps cost lives."
                        </p>
                    </div>
                    <ul class="md:col-span-2 grid gap-4">
                        {PROBLEMS
                            .iter()
                            .enumerate()
                            .map(|(i, problem)| {
                                let class = format!(
                                    "relief-problem-card {} rounded-2xl bg-slate-900/60 border border-slate-800 p-4",
                                    reveal_class("reveal-right"),
                                );
                                view! {
                                    <li class=class style=stagger_style(i, LIST_STAGGER_MS)>
                                        {*problem}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

/// Our solution: four feature cards
#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <section id=SectionId::Solution.id() class="border-t border-slate-800/60">
            <div class="mx-auto max-w-7xl px-4 py-16">
                <h2 class=reveal_class("reveal-up text-2xl md:text-3xl font-bold")>
                    "Our Solution"
                </h2>
                <p class="mt-3 text-slate-300 max-w-3xl">
                    "ReliefMate AI delivers verified relief information through an AI assistant with multilingual support and a forthcoming NGO dashboard for triage and coordination."
                </p>

                <div
                    id=SectionId::Features.id()
                    class="mt-8 grid sm:grid-cols-2 lg:grid-cols-4 gap-5 scroll-mt-24"
                >
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| view! { <FeatureCard feature=*feature position=i /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(feature: Feature, position: usize) -> impl IntoView {
    let class = format!(
        "relief-feature-card {} rounded-2xl h-full bg-slate-900/60 border border-slate-800 p-5",
        reveal_class("reveal-up"),
    );

    view! {
        <div class=class style=stagger_style(position, CARD_STAGGER_MS)>
            <div class="w-10 h-10 rounded-xl bg-cyan-500/10 border border-cyan-500/30 flex items-center justify-center">
                <Icon kind=feature.icon class="w-5 h-5 text-cyan-300" />
            </div>
            <h3 class="mt-4 font-semibold text-lg">{feature.title}</h3>
            <p class="mt-1 text-sm text-slate-300">{feature.description}</p>
        </div>
    }
}

/// How it works: three numbered steps
#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id=SectionId::How.id() class="border-t border-slate-800/60">
            <div class="mx-auto max-w-7xl px-4 py-16">
                <h2 class=reveal_class("reveal-up text-2xl md:text-3xl font-bold")>
                    "How It Works"
                </h2>
                <ol class="mt-8 grid md:grid-cols-3 gap-6">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| view! { <StepCard step=*step position=i /> })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn StepCard(step: Step, position: usize) -> impl IntoView {
    let class = format!(
        "relief-step-card {} relative rounded-2xl bg-slate-900/60 border border-slate-800 p-6",
        reveal_class("reveal-up-sm"),
    );

    view! {
        <li class=class style=stagger_style(position, LIST_STAGGER_MS)>
            <div class="absolute -top-3 -left-3 w-10 h-10 rounded-xl bg-cyan-500 text-slate-900 font-bold flex items-center justify-center shadow-lg">
                {step.index.to_string()}
            </div>
            <div class="ml-6">
                <Icon kind=step.icon class="w-6 h-6 text-cyan-300" />
            </div>
            <h3 class="mt-2 font-semibold text-lg">{step.title}</h3>
            <p class="mt-1 text-sm text-slate-300">{step.description}</p>
        </li>
    }
}

/// Live demo call to action and contact address
#[component]
fn DemoSection() -> impl IntoView {
    let links = use_links();

    view! {
        <section id=SectionId::Demo.id() class="border-t border-slate-800/60">
            <div class="mx-auto max-w-7xl px-4 py-16 text-center">
                <h2 class=reveal_class("reveal-up text-2xl md:text-3xl font-bold")>
                    "Try the Live Demo"
                </h2>
                <p class="mt-3 text-slate-300 max-w-2xl mx-auto">
                    "Experience ReliefMate AI in action. Ask about shelters, helplines or submit a need."
                </p>
                <div class="mt-6 flex gap-3 justify-center">
                    <ExternalLink
                        href=links.demo.clone()
                        class="px-6 py-3 rounded-2xl bg-cyan-500 hover:bg-cyan-400 text-slate-900 font-semibold inline-flex items-center gap-2"
                    >
                        "Open Live Demo"
                        <Icon kind=IconKind::ArrowRight />
                    </ExternalLink>
                    <ExternalLink
                        href=links.repository.clone()
                        class="px-6 py-3 rounded-2xl bg-slate-800/70 hover:bg-slate-700 font-semibold inline-flex items-center gap-2"
                    >
                        <Icon kind=IconKind::Github />
                        "View on GitHub"
                    </ExternalLink>
                </div>
                <div class="mt-8 text-sm text-slate-400">
                    "Contact: "
                    <a class="underline hover:text-cyan-300" href=mailto(DEMO_CONTACT_EMAIL)>
                        {DEMO_CONTACT_EMAIL}
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    let links = use_links();

    view! {
        <footer class="border-t border-slate-800/60">
            <div class="mx-auto max-w-7xl px-4 py-10 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-slate-400">
                <div>{copyright_line(current_year())}</div>
                <div class="flex items-center gap-6">
                    <ExternalLink href=links.repository.clone() class="hover:text-cyan-300">
                        "GitHub"
                    </ExternalLink>
                    <ExternalLink href=links.demo.clone() class="hover:text-cyan-300">
                        "Live Demo"
                    </ExternalLink>
                    <a class="hover:text-cyan-300" href=links.mailto()>
                        "Email"
                    </a>
                </div>
            </div>
        </footer>
    }
}

/// CSS for entrance and mount animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Scroll reveal: hidden until the observer adds .visible */
            .reveal {
                opacity: 0;
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .reveal-up { transform: translateY(24px); }
            .reveal-up-sm { transform: translateY(16px); transition-duration: 0.5s; }
            .reveal-right { transform: translateX(20px); transition-duration: 0.4s; }
            .reveal.visible {
                opacity: 1;
                transform: none;
            }

            /* Mount animations */
            @keyframes relief-orb-in {
                from { opacity: 0; transform: scale(0.6); }
                to { opacity: 0.7; transform: scale(1); }
            }
            @keyframes relief-card-left-in {
                from { transform: rotate(-6deg) translateY(10px); }
                to { transform: rotate(-4deg) translateY(0); }
            }
            @keyframes relief-card-right-in {
                from { transform: rotate(5deg) translateY(20px); }
                to { transform: rotate(3deg) translateY(6px); }
            }
            @keyframes relief-card-chat-in {
                from { opacity: 0; transform: scale(0.9); }
                to { opacity: 1; transform: scale(1); }
            }
            .relief-orb { animation: relief-orb-in 1.2s ease-out both; }
            .relief-card-left { animation: relief-card-left-in 1.2s ease-out both; }
            .relief-card-right { animation: relief-card-right-in 1.2s ease-out 0.1s both; }
            .relief-card-chat { animation: relief-card-chat-in 0.9s ease-out 0.15s both; }

            @media (prefers-reduced-motion: reduce) {
                .reveal, .reveal.visible {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
                .relief-orb, .relief-card-left, .relief-card-right, .relief-card-chat {
                    animation: none;
                }
            }
            "#
        </style>

        // Show revealed content as-is when the observer script cannot run
        <noscript inner_html=noscript_fallback()></noscript>
    }
}

/// Script for scroll-triggered reveal using IntersectionObserver
#[component]
fn ScrollRevealScript() -> impl IntoView {
    let script = RevealOptions::default().observer_script();
    view! { <script inner_html=script></script> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_with(links: Option<Links>) -> String {
        let owner = Owner::new();
        owner.with(|| {
            if let Some(links) = links {
                provide_context(links);
            }
            view! { <LandingPage /> }.to_html()
        })
    }

    fn render() -> String {
        render_with(None)
    }

    /// Markup between the first `open` and the following `close`
    fn slice_between<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
        let start = html.find(open).expect("open tag present");
        let end = start + html[start..].find(close).expect("close tag present");
        &html[start..end]
    }

    fn assert_in_order(html: &str, needles: &[&str]) {
        let mut last = 0;
        for needle in needles {
            let pos = html[last..]
                .find(needle)
                .unwrap_or_else(|| panic!("{needle:?} missing or out of order"));
            last += pos + needle.len();
        }
    }

    // ========================================================================
    // Content lists
    // ========================================================================

    #[test]
    fn test_card_counts_match_content() {
        let html = render();

        assert_eq!(html.matches("class=\"relief-problem-card ").count(), PROBLEMS.len());
        assert_eq!(html.matches("class=\"relief-feature-card ").count(), FEATURES.len());
        assert_eq!(html.matches("class=\"relief-step-card ").count(), STEPS.len());
    }

    #[test]
    fn test_problems_render_in_order() {
        let html = render();
        assert_in_order(
            &html,
            &[
                "Victims lack verified shelter",
                "Relief efforts are fragmented",
                "Volunteers have no single source of truth",
            ],
        );
    }

    #[test]
    fn test_features_render_in_order() {
        let html = render();
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_in_order(&html, &titles);
    }

    #[test]
    fn test_steps_render_in_order() {
        let html = render();
        let how = &html[html.find("id=\"how\"").unwrap()..];
        let titles: Vec<&str> = STEPS.iter().map(|s| s.title).collect();
        assert_in_order(how, &titles);
    }

    #[test]
    fn test_feature_cards_carry_icons() {
        let html = render();
        for feature in FEATURES {
            assert!(html.contains(&format!("lucide-{}", feature.icon)));
        }
    }

    // ========================================================================
    // Anchors
    // ========================================================================

    #[test]
    fn test_every_section_id_exists_once() {
        let html = render();
        for section in SectionId::ALL {
            let attr = format!("id=\"{}\"", section.id());
            assert_eq!(html.matches(&attr).count(), 1, "{attr} must appear once");
        }
    }

    #[test]
    fn test_every_fragment_link_has_a_target() {
        let html = render();
        for href in html.split("href=\"#").skip(1) {
            let fragment = &href[..href.find('"').unwrap()];
            let attr = format!("id=\"{fragment}\"");
            assert_eq!(html.matches(&attr).count(), 1, "#{fragment} has no single target");
        }
    }

    #[test]
    fn test_nav_lists_sections_in_order() {
        let html = render();
        let nav = slice_between(&html, "<nav", "</nav>");
        let hrefs: Vec<String> = NAV_ENTRIES
            .iter()
            .map(|e| format!("href=\"{}\"", e.target.href()))
            .collect();
        let hrefs: Vec<&str> = hrefs.iter().map(String::as_str).collect();
        assert_in_order(nav, &hrefs);
    }

    // ========================================================================
    // Links
    // ========================================================================

    #[test]
    fn test_navbar_has_two_action_links() {
        let html = render();
        let links = Links::default();
        let header = slice_between(&html, "<header", "</header>");

        assert_eq!(header.matches("target=\"_blank\"").count(), 2);
        assert_in_order(
            header,
            &[&format!("href=\"{}\"", links.repository), "GitHub"],
        );
        assert_in_order(header, &[&format!("href=\"{}\"", links.demo), "Live Demo"]);
    }

    #[test]
    fn test_default_links_render_verbatim() {
        let html = render();
        let links = Links::default();

        assert!(html.contains("href=\"https://reliefmateai811.streamlit.app/\""));
        assert!(html.contains("href=\"https://github.com/GohelR/ReliefMateAI\""));
        assert!(html.contains("href=\"mailto:ravi.n.gohel811@gmail.com\""));
        assert!(html.contains("href=\"mailto:ravigohel226020332021@gmail.com\""));
        assert!(html.contains(DEMO_CONTACT_EMAIL));
        assert_eq!(html.matches(&format!("href=\"{}\"", links.demo)).count(), 4);
        assert_eq!(html.matches(&format!("href=\"{}\"", links.repository)).count(), 3);
    }

    #[test]
    fn test_links_come_from_context() {
        let custom = Links {
            demo: "https://demo.example.org/try?lang=gu".to_string(),
            repository: "https://git.example.org/relief".to_string(),
            email: "team@example.org".to_string(),
        };
        let html = render_with(Some(custom));

        assert!(html.contains("href=\"https://demo.example.org/try?lang=gu\""));
        assert_eq!(
            html.matches("href=\"https://demo.example.org/try?lang=gu\"").count(),
            4
        );
        assert!(html.contains("https://git.example.org/relief"));
        assert!(html.contains("href=\"mailto:team@example.org\""));
        assert!(!html.contains("reliefmateai811.streamlit.app"));
        assert!(!html.contains("github.com/GohelR"));
    }

    #[test]
    fn test_external_links_open_new_context() {
        let html = render();
        let blank = html.matches("target=\"_blank\"").count();
        let rel = html.matches("rel=\"noopener noreferrer\"").count();

        // navbar 2, hero 1, demo 2, footer 2
        assert_eq!(blank, 7);
        assert_eq!(rel, blank);
    }

    // ========================================================================
    // Footer and animation
    // ========================================================================

    #[test]
    fn test_footer_shows_current_year() {
        let html = render();
        let footer = slice_between(&html, "<footer", "</footer>");
        assert!(footer.contains(&copyright_line(current_year())));
    }

    #[test]
    fn test_animated_elements_start_hidden() {
        let html = render();

        assert!(!html.contains("reveal visible"));
        assert!(html.matches("class=\"reveal ").count() >= 5);
        assert!(html.contains("obs.unobserve(entry.target)"));
    }

    #[test]
    fn test_hidden_content_has_noscript_fallback() {
        let html = render();
        let noscript = slice_between(&html, "<noscript>", "</noscript>");

        assert!(noscript.contains(".reveal{opacity:1;transform:none}"));
    }

    #[test]
    fn test_list_items_are_staggered() {
        let html = render();
        let problems = slice_between(&html, "id=\"problem\"", "</section>");

        assert_in_order(
            problems,
            &[
                "transition-delay: 0ms",
                "transition-delay: 80ms",
                "transition-delay: 160ms",
            ],
        );
    }

    // ========================================================================
    // SEO
    // ========================================================================

    #[test]
    fn test_meta_tags_do_not_claim_other_origins() {
        let links = Links::default();

        for (key, content) in page_meta_tags() {
            assert_ne!(key, MetaKey::Property("og:url"));
            assert!(!content.contains(&links.demo), "{key:?} points at the demo");
            assert!(!content.contains("http"), "{key:?} carries a URL");
        }
    }

    #[test]
    fn test_meta_tags_describe_page() {
        let tags = page_meta_tags();

        assert!(tags.contains(&(MetaKey::Name("description"), PAGE_DESCRIPTION)));
        assert!(tags.contains(&(MetaKey::Property("og:title"), PAGE_TITLE)));
    }

    #[test]
    fn test_structured_data_links() {
        let data = structured_data(&Links::default());

        assert_eq!(data["@type"], "SoftwareApplication");
        assert_eq!(data["name"], PRODUCT_NAME);
        assert_eq!(data["url"], "https://reliefmateai811.streamlit.app/");
        assert_eq!(data["codeRepository"], "https://github.com/GohelR/ReliefMateAI");
    }
}
