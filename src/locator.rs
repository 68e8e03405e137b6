//! Declarative element descriptors, resolved against the live DOM at
//! interaction time.
//!
//! A `Locator` never holds a node handle; every interaction re-renders the
//! descriptor into a JavaScript resolution expression and evaluates it in the
//! tab, so a re-rendered page can never leave the suite holding a stale
//! element.

use std::fmt;

use crate::utils::javascript as js;

/// ARIA-ish role a descriptor can target. Role matching approximates the
/// accessibility tree: candidates are limited to visible elements and matched
/// by accessible name (aria-label, aria-labelledby, `label[for]`, text).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
    Link,
    Textbox,
    Heading,
    Dialog,
}

impl Role {
    fn css(self) -> &'static str {
        match self {
            Role::Button => "button, input[type='button'], input[type='submit'], [role='button']",
            Role::Link => "a, [role='link']",
            Role::Textbox => {
                "input:not([type]), input[type='text'], input[type='password'], \
                 input[type='email'], input[type='tel'], input[type='number'], \
                 textarea, [role='textbox']"
            }
            Role::Heading => "h1, h2, h3, h4, h5, h6, [role='heading']",
            Role::Dialog => "[role='dialog'], .modal",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Button => "button",
            Role::Link => "link",
            Role::Textbox => "textbox",
            Role::Heading => "heading",
            Role::Dialog => "dialog",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Strategy {
    Css(String),
    CssWithText { css: String, text: String },
    Role { role: Role, name: String, exact: bool },
    Label(String),
    Text(String),
}

/// Immutable description of where to find one element: a selection strategy
/// plus optional disambiguation (nth match, scoping to a container locator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    strategy: Strategy,
    nth: Option<usize>,
    within: Option<Box<Locator>>,
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Css(selector.into()))
    }

    /// Match by role and accessible name (substring, whitespace-normalized).
    pub fn role(role: Role, name: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Role {
            role,
            name: name.into(),
            exact: false,
        })
    }

    /// Match by role and accessible name, requiring the whole name to match.
    pub fn role_exact(role: Role, name: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Role {
            role,
            name: name.into(),
            exact: true,
        })
    }

    /// Match by `aria-label` or an associated `<label for=..>` element.
    pub fn label(value: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Label(value.into()))
    }

    /// Match the deepest elements whose text contains `value`.
    pub fn text(value: impl Into<String>) -> Self {
        Self::from_strategy(Strategy::Text(value.into()))
    }

    fn from_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            nth: None,
            within: None,
        }
    }

    /// Narrow a CSS locator to elements whose text contains `text`.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        if let Strategy::Css(css) = self.strategy {
            self.strategy = Strategy::CssWithText {
                css,
                text: text.into(),
            };
        }
        self
    }

    /// Select the nth match (0-based) instead of the first.
    pub fn nth(mut self, index: usize) -> Self {
        self.nth = Some(index);
        self
    }

    /// Select the first match explicitly.
    pub fn first(self) -> Self {
        self.nth(0)
    }

    /// Restrict matching to descendants of `container`.
    pub fn within(mut self, container: Locator) -> Self {
        self.within = Some(Box::new(container));
        self
    }

    /// Candidate-array expression for this locator's own strategy, evaluated
    /// against the `scope` variable in the generated script.
    fn base_candidates_js(&self) -> String {
        match &self.strategy {
            Strategy::Css(selector) => {
                format!("Array.from(scope.querySelectorAll({}))", js::quote(selector))
            }
            Strategy::CssWithText { css, text } => format!(
                "Array.from(scope.querySelectorAll({})).filter((el) => __matches(el.textContent, {}, false))",
                js::quote(css),
                js::quote(&js::normalize_text(text)),
            ),
            Strategy::Role { role, name, exact } => format!(
                "Array.from(scope.querySelectorAll({})).filter((el) => __visible(el) && __matches(__accName(el), {}, {}))",
                js::quote(role.css()),
                js::quote(&js::normalize_text(name)),
                exact,
            ),
            Strategy::Label(value) => {
                format!("__byLabel(scope, {})", js::quote(&js::normalize_text(value)))
            }
            Strategy::Text(value) => {
                format!("__deepest(scope, {})", js::quote(&js::normalize_text(value)))
            }
        }
    }

    /// Scoping chain, outermost container first, `self` last.
    fn scope_chain(&self) -> Vec<&Locator> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(locator) = current {
            chain.push(locator);
            current = locator.within.as_deref();
        }
        chain.reverse();
        chain
    }

    fn body_js(&self) -> String {
        let chain = self.scope_chain();
        let mut body = String::from("let scope = document;\n");
        for container in &chain[..chain.len() - 1] {
            body.push_str(&format!(
                "scope = __pick({}, {});\nif (!scope) {{ return __onMissingScope; }}\n",
                container.base_candidates_js(),
                container.nth.unwrap_or(0),
            ));
        }
        body.push_str(&format!(
            "const els = {};\n",
            chain[chain.len() - 1].base_candidates_js()
        ));
        body
    }

    /// Expression evaluating to the selected element, or `null`.
    pub(crate) fn resolve_js(&self) -> String {
        format!(
            "(() => {{\n{helpers}\nconst __onMissingScope = null;\n{body}return __pick(els, {nth});\n}})()",
            helpers = HELPERS_JS,
            body = self.body_js(),
            nth = self.nth.unwrap_or(0),
        )
    }

    /// Expression evaluating to the number of matches (0 when the container
    /// scope itself is missing).
    pub(crate) fn count_js(&self) -> String {
        format!(
            "(() => {{\n{helpers}\nconst __onMissingScope = 0;\n{body}return els.length;\n}})()",
            helpers = HELPERS_JS,
            body = self.body_js(),
        )
    }

    /// Expression evaluating to whether the selected element exists and is
    /// visible.
    pub(crate) fn visible_js(&self) -> String {
        format!(
            "(() => {{\n{helpers}\nconst __onMissingScope = false;\n{body}return __visible(__pick(els, {nth}));\n}})()",
            helpers = HELPERS_JS,
            body = self.body_js(),
            nth = self.nth.unwrap_or(0),
        )
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(container) = &self.within {
            write!(f, "{} >> ", container)?;
        }
        match &self.strategy {
            Strategy::Css(selector) => write!(f, "css={}", selector)?,
            Strategy::CssWithText { css, text } => write!(f, "css={}[text~={:?}]", css, text)?,
            Strategy::Role { role, name, exact } => {
                write!(f, "role={}[name={:?}]", role, name)?;
                if *exact {
                    write!(f, "[exact]")?;
                }
            }
            Strategy::Label(value) => write!(f, "label={:?}", value)?,
            Strategy::Text(value) => write!(f, "text={:?}", value)?,
        }
        if let Some(nth) = self.nth {
            write!(f, " nth={}", nth)?;
        }
        Ok(())
    }
}

/// Helper functions shared by every generated resolution script. Kept inside
/// the IIFE so scripts stay self-contained and never pollute page globals.
const HELPERS_JS: &str = r#"const __norm = (t) => (t || '').replace(/\s+/g, ' ').trim();
const __matches = (actual, wanted, exact) => exact ? __norm(actual) === wanted : __norm(actual).includes(wanted);
const __visible = (el) => {
    if (!el) { return false; }
    const rect = el.getBoundingClientRect();
    if (rect.width <= 0 || rect.height <= 0) { return false; }
    const style = window.getComputedStyle(el);
    return style.visibility !== 'hidden' && style.display !== 'none';
};
const __accName = (el) => {
    const aria = el.getAttribute('aria-label');
    if (aria) { return aria; }
    const refs = el.getAttribute('aria-labelledby');
    if (refs) {
        return refs.split(/\s+/).map((id) => {
            const node = document.getElementById(id);
            return node ? node.textContent : '';
        }).join(' ');
    }
    if (el.id) {
        const label = document.querySelector('label[for="' + CSS.escape(el.id) + '"]');
        if (label) { return label.textContent; }
    }
    if (el.tagName === 'INPUT' && (el.type === 'button' || el.type === 'submit')) {
        return el.value;
    }
    return el.textContent;
};
const __byLabel = (scope, wanted) => {
    const out = Array.from(scope.querySelectorAll('[aria-label]'))
        .filter((el) => __visible(el) && __matches(el.getAttribute('aria-label'), wanted, true));
    for (const label of scope.querySelectorAll('label[for]')) {
        if (!__matches(label.textContent, wanted, true)) { continue; }
        const control = document.getElementById(label.getAttribute('for'));
        if (control) { out.push(control); }
    }
    return out;
};
const __deepest = (scope, wanted) => {
    const all = Array.from(scope.querySelectorAll('*'))
        .filter((el) => __matches(el.textContent, wanted, false));
    return all.filter((el) => !all.some((other) => other !== el && el.contains(other)));
};
const __pick = (els, nth) => (els.length > nth ? els[nth] : null);"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_resolution_quotes_the_selector() {
        let script = Locator::css("div.card.h-100").resolve_js();
        assert!(script.contains(r#"scope.querySelectorAll("div.card.h-100")"#));
        assert!(script.contains("return __pick(els, 0);"));
    }

    #[test]
    fn css_selectors_with_embedded_quotes_are_escaped() {
        let script = Locator::css(r#"button[onclick="purchaseOrder()"]"#).resolve_js();
        assert!(script.contains(r#"button[onclick=\"purchaseOrder()\"]"#));
    }

    #[test]
    fn role_matching_filters_by_accessible_name() {
        let script = Locator::role(Role::Link, "Phones").resolve_js();
        assert!(script.contains("a, [role='link']"));
        assert!(script.contains(r#"__matches(__accName(el), "Phones", false)"#));
    }

    #[test]
    fn exact_role_matching_is_rendered_as_exact() {
        let script = Locator::role_exact(Role::Link, "Cart").resolve_js();
        assert!(script.contains(r#"__matches(__accName(el), "Cart", true)"#));
    }

    #[test]
    fn role_names_are_whitespace_normalized() {
        let script = Locator::role(Role::Link, "Home   (current)").resolve_js();
        assert!(script.contains(r#""Home (current)""#));
    }

    #[test]
    fn nth_selects_a_later_match() {
        let script = Locator::css("div.card.h-100").nth(2).resolve_js();
        assert!(script.contains("return __pick(els, 2);"));
    }

    #[test]
    fn first_is_nth_zero() {
        assert_eq!(
            Locator::css("a").first(),
            Locator::css("a").nth(0)
        );
    }

    #[test]
    fn within_resolves_the_container_before_the_target() {
        let script = Locator::label("Close")
            .within(Locator::role(Role::Dialog, "Log in"))
            .resolve_js();
        let container_at = script
            .find("[role='dialog'], .modal")
            .expect("container query present");
        let target_at = script.find("__byLabel").expect("target query present");
        assert!(container_at < target_at);
        assert!(script.contains("if (!scope) { return __onMissingScope; }"));
    }

    #[test]
    fn with_text_narrows_a_css_locator() {
        let script = Locator::css("button.btn.btn-primary")
            .with_text("Send message")
            .resolve_js();
        assert!(script.contains(r#"__matches(el.textContent, "Send message", false)"#));
    }

    #[test]
    fn count_script_reports_zero_for_a_missing_container() {
        let script = Locator::css("a")
            .within(Locator::css("#orderModal"))
            .count_js();
        assert!(script.contains("const __onMissingScope = 0;"));
        assert!(script.contains("return els.length;"));
    }

    #[test]
    fn visible_script_checks_the_picked_element() {
        let script = Locator::css(".sa-placeholder").visible_js();
        assert!(script.contains("return __visible(__pick(els, 0));"));
    }

    #[test]
    fn display_describes_the_full_descriptor() {
        let close = Locator::label("Close").within(Locator::role(Role::Dialog, "Sign up"));
        assert_eq!(close.to_string(), r#"role=dialog[name="Sign up"] >> label="Close""#);

        let third_card = Locator::css("div.card.h-100").nth(2);
        assert_eq!(third_card.to_string(), "css=div.card.h-100 nth=2");

        let cart = Locator::role_exact(Role::Link, "Cart");
        assert_eq!(cart.to_string(), r#"role=link[name="Cart"][exact]"#);
    }
}
