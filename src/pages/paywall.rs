//! "Coming soon" placeholder shown for every gated section.

use crate::pages::html::escape;
use crate::pages::PageEnv;
use crate::routing::localized_path;

/// Section shown when none (or an unknown one) is requested.
pub const DEFAULT_SECTION: &str = "feature";

/// Sections the paywall knows how to title.
pub const SECTIONS: &[&str] = &[
    "feature",
    "practice-tests",
    "courses",
    "about",
    "blog",
    "free-test",
    "how-it-works",
    "offerings",
    "best-prep",
    "legal",
    "social",
];

/// Map a requested section onto a known one.
pub fn normalize_section(section: Option<&str>) -> &'static str {
    section
        .and_then(|requested| SECTIONS.iter().find(|known| **known == requested))
        .copied()
        .unwrap_or(DEFAULT_SECTION)
}

/// Bundle key holding the display title of `section`.
pub fn section_title_key(section: &str) -> String {
    format!("paywall.sections.{}", section.replace('-', "_"))
}

/// Every title key the paywall can look up.
pub fn section_title_keys() -> Vec<String> {
    SECTIONS.iter().map(|section| section_title_key(section)).collect()
}

/// Render the paywall body for `section`.
pub fn render(env: &PageEnv<'_>, section: &str) -> String {
    let locale = env.i18n.locale();
    let section_title = env.i18n.t(&section_title_key(section));

    format!(
        r#"<section class="paywall" data-section="{section}">
{preview}
<div class="paywall-overlay">
<span class="paywall-badge">{badge}</span>
<h1>{heading}</h1>
<p class="paywall-description">{description}</p>
<p class="paywall-notice">{notice}</p>
<div class="paywall-actions">
<a class="button button-primary" href="{home_href}">{back_home}</a>
<a class="button button-secondary" href="{explore_href}">{explore}</a>
</div>
</div>
</section>"#,
        section = escape(section),
        preview = preview(env, section),
        badge = escape(&env.i18n.t("paywall.badge")),
        heading = escape(&env.i18n.t_with("paywall.heading", &[("section", &section_title)])),
        description = escape(&env.i18n.t("paywall.description")),
        notice = escape(&env.i18n.t("paywall.notice")),
        home_href = localized_path(locale, "/"),
        back_home = escape(&env.i18n.t("paywall.back_home")),
        explore_href = localized_path(locale, "/practice-tests"),
        explore = escape(&env.i18n.t("paywall.explore")),
    )
}

/// Blurred mock-up of the gated section shown behind the notice.
///
/// Built from strings the landing page already carries, so every locale
/// gets a preview without extra bundle keys.
fn preview(env: &PageEnv<'_>, section: &str) -> String {
    let t = |key: &str| escape(&env.i18n.t(key));

    let (title, body) = match section {
        "free-test" => (
            t("practice_tests_section.title"),
            format!(
                r#"<p>{}</p><ol class="preview-options"><li>{}</li><li class="selected">{}</li><li>{}</li></ol>"#,
                t("practice_tests_section.description"),
                t("practice_tests_section.feature1_title"),
                t("practice_tests_section.feature2_title"),
                t("practice_tests_section.feature3_title"),
            ),
        ),
        "practice-tests" => (
            t("offerings.practice_tests"),
            preview_cards(&[
                (t("offerings.practice_tests_features.feature1"), t("practice_tests_section.feature1_desc")),
                (t("offerings.practice_tests_features.feature2"), t("practice_tests_section.feature2_desc")),
                (t("offerings.practice_tests_features.feature3"), t("practice_tests_section.feature3_desc")),
            ]),
        ),
        "courses" => (
            t("offerings.crash_course"),
            preview_cards(&[
                (t("offerings.crash_course_features.feature1"), t("offerings.crash_course_subtitle")),
                (t("offerings.crash_course_features.feature2"), t("best_prep.description")),
                (t("offerings.crash_course_features.feature3"), t("best_prep.subtitle")),
            ]),
        ),
        "about" => (
            t("navbar.who_we_are"),
            format!(r#"<p>{}</p><div class="preview-team"></div>"#, t("footer.tagline")),
        ),
        "blog" => (
            t("navbar.blog"),
            preview_cards(&[
                (t("best_prep.title"), t("best_prep.description")),
                (t("best_prep.video_title"), t("best_prep.video_description")),
            ]),
        ),
        _ => (
            t("hero.title"),
            format!("<p>{}</p>", t("hero.subtitle")),
        ),
    };

    format!(
        r#"<div class="paywall-preview preview-{}" aria-hidden="true"><h2>{}</h2>{}</div>"#,
        escape(section),
        title,
        body
    )
}

fn preview_cards(cards: &[(String, String)]) -> String {
    let mut html = String::from(r#"<div class="preview-cards">"#);
    for (title, text) in cards {
        html.push_str(&format!("<article><h3>{}</h3><p>{}</p></article>", title, text));
    }
    html.push_str("</div>");
    html
}
