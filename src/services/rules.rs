//! Rule evaluator: the single source of truth for the challenge checks.
//!
//! One entry point per challenge plus a document-wide integration pass.
//! Every check is independent: a failing predicate never suppresses its
//! siblings. The only short-circuit is a missing challenge root, which
//! yields a single failed "not found" check for that challenge.
//!
//! A missing optional descendant is treated as an empty class list, so its
//! checks fail with their normal hints rather than being skipped.

use anyhow::{anyhow, bail, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::constants::{
    CHALLENGE_1_TITLE, CHALLENGE_2_TITLE, CHALLENGE_3_TITLE, INTEGRATION_TITLE,
    MAIN_CONTENT_MARKER,
};
use crate::domain::models::{ChallengeVerdict, Check, OverallResult, Severity};
use crate::services::score;

/// Evaluate all three challenges plus the integration pass and aggregate.
pub fn evaluate_all(doc: &Html) -> Result<OverallResult> {
    let challenges = vec![
        evaluate_card(doc)?,
        evaluate_navigation(doc)?,
        evaluate_dashboard(doc)?,
    ];
    let integration = evaluate_integration(doc)?;
    Ok(score::aggregate(challenges, integration))
}

pub fn evaluate_challenge(id: u8, doc: &Html) -> Result<ChallengeVerdict> {
    match id {
        1 => evaluate_card(doc),
        2 => evaluate_navigation(doc),
        3 => evaluate_dashboard(doc),
        _ => bail!("unknown challenge: {id} (expected 1, 2, or 3)"),
    }
}

/// Challenge 1: the responsive card.
pub fn evaluate_card(doc: &Html) -> Result<ChallengeVerdict> {
    let card = match doc_find(doc, "#challenge-1 .bg-white")? {
        Some(el) => el,
        None => {
            return Ok(missing_anchor(
                1,
                CHALLENGE_1_TITLE,
                "card container present",
                "Card container not found",
            ))
        }
    };

    let card_classes = classes(Some(card));
    let image = find(card, "img")?;
    let content = find(card, "div>div")?;
    let title = descend(content, "h3")?;
    let button = descend(content, "button")?;

    let image_classes = classes(image);
    let content_classes = classes(content);
    let title_classes = classes(title);
    let button_classes = classes(button);

    let checks = vec![
        Check::new(
            "responsive flex layout",
            Severity::Error,
            card_classes.contains("md:flex"),
            "Card container should have md:flex for a side-by-side layout on tablet",
        ),
        Check::new(
            "responsive image sizing",
            Severity::Error,
            numbered(&image_classes, "md:w-")? && numbered(&image_classes, "md:h-")?,
            "Image should have responsive width and height classes like md:w-32 md:h-32",
        ),
        Check::new(
            "content spacing for tablet",
            Severity::Error,
            content_classes.contains("md:mt-0") && numbered(&content_classes, "md:ml-")?,
            "Content should have md:mt-0 and a left margin like md:ml-4 on tablet",
        ),
        Check::new(
            "responsive typography",
            Severity::Error,
            title_classes.contains("md:text-") || title_classes.contains("lg:text-"),
            "Title should have responsive text sizing like md:text-xl",
        ),
        Check::new(
            "desktop hover effects",
            Severity::Error,
            card_classes.contains("lg:hover:"),
            "Card should have desktop hover effects like lg:hover:shadow-lg",
        ),
        Check::new(
            "responsive button sizing",
            Severity::Error,
            button_classes.contains("md:w-auto"),
            "Button should change from full width to auto width on tablet with md:w-auto",
        ),
        Check::new(
            "mobile-first base styles",
            Severity::Error,
            card_classes.contains("rounded-lg")
                && image_classes.contains("w-full")
                && button_classes.contains("w-full"),
            "Keep base mobile styles: rounded-lg on the card, w-full on the image and button",
        ),
    ];

    Ok(ChallengeVerdict::new(1, CHALLENGE_1_TITLE, checks))
}

/// Challenge 2: the adaptive navigation.
pub fn evaluate_navigation(doc: &Html) -> Result<ChallengeVerdict> {
    let nav = match doc_find(doc, "#challenge-2 nav")? {
        Some(el) => el,
        None => {
            return Ok(missing_anchor(
                2,
                CHALLENGE_2_TITLE,
                "navigation element present",
                "Navigation element not found",
            ))
        }
    };

    let nav_classes = classes(Some(nav));
    let hamburger = find(nav, "button")?;
    let menu = find(nav, "ul")?;
    let items = match menu {
        Some(m) => find_all(m, "li")?,
        None => Vec::new(),
    };
    let extra = find(nav, "div:last-child")?;

    let hamburger_classes = classes(hamburger);
    let menu_classes = classes(menu);
    let extra_classes = classes(extra);

    let mut links_ok = !items.is_empty();
    for item in &items {
        let link_classes = classes(find(*item, "a")?);
        links_ok = links_ok
            && link_classes.contains("block")
            && numbered(&link_classes, "py-")?;
    }

    let checks = vec![
        Check::new(
            "hamburger hidden on tablet",
            Severity::Error,
            hamburger_classes.contains("md:hidden"),
            "Hamburger button should be hidden on tablet and up with md:hidden",
        ),
        Check::new(
            "horizontal menu layout",
            Severity::Error,
            menu_classes.contains("md:flex") && menu_classes.contains("md:items-center"),
            "Menu should have md:flex and md:items-center for a horizontal layout on tablet",
        ),
        Check::new(
            "responsive menu spacing",
            Severity::Error,
            menu_classes.contains("md:mt-0")
                && menu_classes.contains("md:space-y-0")
                && numbered(&menu_classes, "md:space-x-")?,
            "Menu should reset stacked spacing with md:mt-0 and md:space-y-0 and add horizontal spacing like md:space-x-6",
        ),
        Check::new(
            "menu item link layout",
            Severity::Error,
            links_ok,
            "Menu links should be block elements with vertical padding like py-2",
        ),
        Check::new(
            "semantic list structure",
            Severity::Error,
            nav_classes.contains("bg-gray-800") && tag_is(menu, "ul"),
            "Navigation should keep its bg-gray-800 base styling and use a ul element for the menu",
        ),
        Check::new(
            "minimum menu items",
            Severity::Error,
            items.len() >= 3,
            "Navigation should have at least 3 menu items",
        ),
        Check::new(
            "extra content disclosure",
            Severity::Warning,
            extra_classes.contains("hidden") && extra_classes.contains("lg:block"),
            "Consider hiding the extra content on mobile and showing it on desktop with hidden lg:block",
        ),
    ];

    Ok(ChallengeVerdict::new(2, CHALLENGE_2_TITLE, checks))
}

/// Challenge 3: the responsive dashboard grid.
pub fn evaluate_dashboard(doc: &Html) -> Result<ChallengeVerdict> {
    let dashboard = match doc_find(doc, "#challenge-3 .bg-white > div")? {
        Some(el) => el,
        None => {
            return Ok(missing_anchor(
                3,
                CHALLENGE_3_TITLE,
                "dashboard container present",
                "Dashboard container not found",
            ))
        }
    };

    let dashboard_classes = classes(Some(dashboard));
    let main = find(dashboard, "#c3-main-content")?;
    let secondary = find(dashboard, "#c3-secondary-content")?;
    let tertiary = find(dashboard, "#c3-tertiary-content")?;
    let sidebar = find(dashboard, "#c3-sidebar")?;
    let stats = descend(main, "#c3-stats")?;

    let main_classes = classes(main);
    let secondary_classes = classes(secondary);
    let tertiary_classes = classes(tertiary);
    let sidebar_classes = classes(sidebar);
    let stats_classes = classes(stats);

    let tinted_sections = count_in(dashboard, r#"div[class*="bg-"]"#)?;
    let hidden_sections = count_in(dashboard, ".hidden")?;

    let checks = vec![
        Check::new(
            "responsive grid layout",
            Severity::Error,
            dashboard_classes.contains("grid")
                && dashboard_classes.contains("grid-cols-1")
                && dashboard_classes.contains("md:grid-cols-2")
                && dashboard_classes.contains("lg:grid-cols-3"),
            "Dashboard should use grid with grid-cols-1, md:grid-cols-2 and lg:grid-cols-3",
        ),
        Check::new(
            "grid gap spacing",
            Severity::Error,
            numbered(&dashboard_classes, "gap-")?,
            "Dashboard should have gap spacing between grid items like gap-4",
        ),
        Check::new(
            "secondary content disclosure",
            Severity::Error,
            secondary_classes.contains("hidden") && secondary_classes.contains("md:block"),
            "Secondary content should be hidden on mobile and visible on tablet and up with hidden md:block",
        ),
        Check::new(
            "tertiary content disclosure",
            Severity::Error,
            tertiary_classes.contains("hidden") && tertiary_classes.contains("lg:block"),
            "Tertiary content should stay hidden until desktop with hidden lg:block",
        ),
        Check::new(
            "responsive stats layout",
            Severity::Error,
            stats_classes.contains("md:flex") && numbered(&stats_classes, "md:space-x-")?,
            "Stats should lay out horizontally on tablet with md:flex and spacing like md:space-x-4",
        ),
        Check::new(
            "main content always visible",
            Severity::Error,
            main.is_some()
                && !main_classes.contains("hidden")
                && text(main).contains(MAIN_CONTENT_MARKER),
            "Main content must stay visible at every breakpoint and keep the Main Dashboard section",
        ),
        Check::new(
            "progressive enhancement",
            Severity::Error,
            tinted_sections >= 4 && hidden_sections >= 2,
            "Dashboard should have at least 4 tinted content sections and hide at least 2 of them on mobile",
        ),
        Check::new(
            "sidebar disclosure",
            Severity::Warning,
            sidebar_classes.contains("hidden") && sidebar_classes.contains("lg:block"),
            "Consider hiding the sidebar on mobile and tablet and showing it on desktop with hidden lg:block",
        ),
    ];

    Ok(ChallengeVerdict::new(3, CHALLENGE_3_TITLE, checks))
}

/// Document-wide consistency pass across all challenges.
pub fn evaluate_integration(doc: &Html) -> Result<ChallengeVerdict> {
    let flex = doc_count(doc, r#"[class*="md:flex"]"#)?;
    let hidden = doc_count(doc, r#"[class*="hidden"]"#)?;
    let grid = doc_count(doc, r#"[class*="grid"]"#)?;
    let mobile_first = doc_count(doc, r#"[class*="w-full"][class*="md:w-"]"#)?;
    let images = doc_count(doc, "img")?;
    let images_with_alt = doc_count(doc, "img[alt]")?;

    let checks = vec![
        Check::new(
            "consistent responsive patterns",
            Severity::Error,
            flex >= 2 && hidden >= 3 && grid >= 1,
            "Use md:flex on at least 2 elements, hidden on at least 3, and grid on at least 1 across the template",
        ),
        Check::new(
            "mobile-first sizing",
            Severity::Warning,
            mobile_first >= 1,
            "Pair w-full base sizing with an md:w-* override to keep the template mobile-first",
        ),
        Check::new(
            "image alt coverage",
            Severity::Warning,
            images_with_alt == images,
            "Every img should carry an alt attribute",
        ),
    ];

    Ok(ChallengeVerdict::new(0, INTEGRATION_TITLE, checks))
}

fn missing_anchor(id: u8, title: &str, name: &str, hint: &str) -> ChallengeVerdict {
    ChallengeVerdict::new(id, title, vec![Check::new(name, Severity::Error, false, hint)])
}

fn sel(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("invalid selector `{css}`: {e:?}"))
}

fn doc_find<'a>(doc: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>> {
    Ok(doc.select(&sel(css)?).next())
}

fn doc_count(doc: &Html, css: &str) -> Result<usize> {
    Ok(doc.select(&sel(css)?).count())
}

fn find<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    Ok(scope.select(&sel(css)?).next())
}

fn find_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    Ok(scope.select(&sel(css)?).collect())
}

fn descend<'a>(scope: Option<ElementRef<'a>>, css: &str) -> Result<Option<ElementRef<'a>>> {
    match scope {
        Some(el) => find(el, css),
        None => Ok(None),
    }
}

fn count_in(scope: ElementRef<'_>, css: &str) -> Result<usize> {
    Ok(scope.select(&sel(css)?).count())
}

/// Raw class attribute, empty when the element or the attribute is absent.
/// Token membership is substring-based, matching the lab's loose contract.
fn classes(el: Option<ElementRef<'_>>) -> String {
    el.and_then(|e| e.value().attr("class"))
        .unwrap_or("")
        .to_string()
}

fn text(el: Option<ElementRef<'_>>) -> String {
    el.map(|e| e.text().collect::<String>()).unwrap_or_default()
}

/// Tag names compare case-insensitively: the DOM contract is uppercase,
/// the parser reports lowercase.
fn tag_is(el: Option<ElementRef<'_>>, expected: &str) -> bool {
    el.map(|e| e.value().name().eq_ignore_ascii_case(expected))
        .unwrap_or(false)
}

/// Matches a parametrized utility: the prefix followed by any number,
/// e.g. `numbered(c, "md:w-")` accepts md:w-32 regardless of the value.
fn numbered(classes: &str, prefix: &str) -> Result<bool> {
    let re = Regex::new(&format!(r"{}\d+", regex::escape(prefix)))?;
    Ok(re.is_match(classes))
}
