//! Scroll-triggered entrance animation.
//!
//! Animated elements are rendered with the [`REVEAL_CLASS`] class and start
//! hidden. The browser observer script built by
//! [`RevealOptions::observer_script`] adds [`VISIBLE_CLASS`] the first time an
//! element intersects the viewport and then stops observing it, so the
//! transition happens once per page lifetime. Nothing ever removes the class.
//!
//! Without scripting, [`noscript_fallback`] shows everything unanimated.

/// Class carried by every element that animates in on scroll
pub const REVEAL_CLASS: &str = "reveal";

/// Class added once the element has been seen
pub const VISIBLE_CLASS: &str = "visible";

/// Class list for a hidden element with extra classes appended
pub fn reveal_class(extra: &str) -> String {
    format!("{REVEAL_CLASS} {extra}")
}

/// Markup for a `<noscript>` element that un-hides revealed elements.
pub fn noscript_fallback() -> String {
    format!("<style>.{REVEAL_CLASS}{{opacity:1;transform:none}}</style>")
}

/// Delay for the `index`-th item of a revealed list, in milliseconds.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

/// `style` attribute value carrying a list item's stagger delay.
pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger_delay_ms(index, step_ms))
}

/// IntersectionObserver settings for scroll reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible
    pub threshold: f32,
    /// CSS margin applied to the viewport
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin: "0px 0px -50px 0px",
        }
    }
}

impl RevealOptions {
    /// Browser script that flips hidden elements to visible on first
    /// intersection and stops observing them afterwards.
    ///
    /// Without IntersectionObserver support everything is shown immediately.
    pub fn observer_script(&self) -> String {
        format!(
            r#"(function() {{
    function initReveal() {{
        const targets = document.querySelectorAll('.{reveal}:not(.{visible})');
        if (!('IntersectionObserver' in window)) {{
            targets.forEach(el => el.classList.add('{visible}'));
            return;
        }}
        const observer = new IntersectionObserver((entries, obs) => {{
            entries.forEach(entry => {{
                if (entry.isIntersecting) {{
                    entry.target.classList.add('{visible}');
                    obs.unobserve(entry.target);
                }}
            }});
        }}, {{ threshold: {threshold}, rootMargin: '{root_margin}' }});
        targets.forEach(el => observer.observe(el));
    }}
    if (document.readyState === 'loading') {{
        document.addEventListener('DOMContentLoaded', initReveal);
    }} else {{
        initReveal();
    }}
}})();"#,
            reveal = REVEAL_CLASS,
            visible = VISIBLE_CLASS,
            threshold = self.threshold,
            root_margin = self.root_margin,
        )
    }
}
