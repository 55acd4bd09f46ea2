//! Landing page: hero, offerings, best prep, practice tests preview and the
//! "as seen on" strip.

use crate::pages::html::escape;
use crate::pages::PageEnv;
use crate::routing::localized_path;

/// Publications shown in the "as seen on" strip. Brand names are not translated.
const PRESS: &[&str] = &["Forbes", "The New York Times", "U.S. News", "EdSurge", "Business Insider"];

/// Render the landing page body.
pub fn render(env: &PageEnv<'_>) -> String {
    [
        hero(env),
        offerings(env),
        best_prep(env),
        practice_tests(env),
        as_seen_on(env),
    ]
    .join("\n")
}

fn hero(env: &PageEnv<'_>) -> String {
    let locale = env.i18n.locale();

    format!(
        r#"<section class="hero">
<h1>{title}</h1>
<p class="hero-subtitle">{subtitle}</p>
<div class="hero-actions">
<a class="button button-primary" href="{cta_href}">{cta}</a>
<a class="button button-secondary" href="{tests_href}">{secondary}</a>
</div>
</section>"#,
        title = escape(&env.i18n.t("hero.title")),
        subtitle = escape(&env.i18n.t("hero.subtitle")),
        cta_href = localized_path(locale, "/paywall?section=free-test"),
        cta = escape(&env.i18n.t("hero.cta")),
        tests_href = localized_path(locale, "/practice-tests"),
        secondary = escape(&env.i18n.t("hero.secondary_cta")),
    )
}

fn offerings(env: &PageEnv<'_>) -> String {
    let locale = env.i18n.locale();
    let cards = [
        (
            env.i18n.t("offerings.crash_course"),
            env.i18n.t("offerings.crash_course_subtitle"),
            [
                env.i18n.t("offerings.crash_course_features.feature1"),
                env.i18n.t("offerings.crash_course_features.feature2"),
                env.i18n.t("offerings.crash_course_features.feature3"),
            ],
        ),
        (
            env.i18n.t("offerings.practice_tests"),
            env.i18n.t("offerings.practice_tests_subtitle"),
            [
                env.i18n.t("offerings.practice_tests_features.feature1"),
                env.i18n.t("offerings.practice_tests_features.feature2"),
                env.i18n.t("offerings.practice_tests_features.feature3"),
            ],
        ),
    ];
    let learn_more = escape(&env.i18n.t("offerings.learn_more"));
    let href = localized_path(locale, "/paywall?section=offerings");

    let mut html = format!(
        r#"<section class="offerings">
<h2>{}</h2>
<p class="section-subtitle">{}</p>
<div class="offerings-cards">"#,
        escape(&env.i18n.t("offerings.title")),
        escape(&env.i18n.t("offerings.subtitle")),
    );

    for (title, subtitle, features) in &cards {
        html.push_str(&format!(
            r#"<article class="offering-card"><h3>{}</h3><p>{}</p><ul>"#,
            escape(title),
            escape(subtitle)
        ));
        for feature in features {
            html.push_str(&format!("<li>{}</li>", escape(feature)));
        }
        html.push_str(&format!(
            r#"</ul><a class="button" href="{}">{}</a></article>"#,
            href, learn_more
        ));
    }

    html.push_str("</div>\n</section>");
    html
}

fn best_prep(env: &PageEnv<'_>) -> String {
    let locale = env.i18n.locale();

    format!(
        r#"<section class="best-prep">
<h2>{title}</h2>
<p class="section-subtitle">{subtitle}</p>
<p>{description}</p>
<div class="best-prep-actions">
<a class="button button-primary" href="{learn_href}">{learn_more}</a>
<a class="button button-secondary" href="{sample_href}">{view_sample}</a>
</div>
<figure class="best-prep-video">
<figcaption><strong>{video_title}</strong> {video_description}</figcaption>
</figure>
</section>"#,
        title = escape(&env.i18n.t("best_prep.title")),
        subtitle = escape(&env.i18n.t("best_prep.subtitle")),
        description = escape(&env.i18n.t("best_prep.description")),
        learn_href = localized_path(locale, "/paywall?section=best-prep"),
        learn_more = escape(&env.i18n.t("best_prep.learn_more")),
        sample_href = localized_path(locale, "/paywall?section=free-test"),
        view_sample = escape(&env.i18n.t("best_prep.view_sample")),
        video_title = escape(&env.i18n.t("best_prep.video_title")),
        video_description = escape(&env.i18n.t("best_prep.video_description")),
    )
}

fn practice_tests(env: &PageEnv<'_>) -> String {
    let locale = env.i18n.locale();
    let features = [
        (
            env.i18n.t("practice_tests_section.feature1_title"),
            env.i18n.t("practice_tests_section.feature1_desc"),
        ),
        (
            env.i18n.t("practice_tests_section.feature2_title"),
            env.i18n.t("practice_tests_section.feature2_desc"),
        ),
        (
            env.i18n.t("practice_tests_section.feature3_title"),
            env.i18n.t("practice_tests_section.feature3_desc"),
        ),
    ];

    let mut html = format!(
        r#"<section class="practice-tests">
<h2>{}</h2>
<p>{}</p>
<ul class="practice-tests-features">"#,
        escape(&env.i18n.t("practice_tests_section.title")),
        escape(&env.i18n.t("practice_tests_section.description")),
    );

    for (title, description) in &features {
        html.push_str(&format!(
            "<li><h3>{}</h3><p>{}</p></li>",
            escape(title),
            escape(description)
        ));
    }

    html.push_str(&format!(
        r#"</ul>
<a class="button button-primary" href="{}">{}</a>
</section>"#,
        localized_path(locale, "/paywall?section=practice-tests"),
        escape(&env.i18n.t("practice_tests_section.cta")),
    ));
    html
}

fn as_seen_on(env: &PageEnv<'_>) -> String {
    let logos: String = PRESS
        .iter()
        .map(|name| format!(r#"<li class="press-logo">{}</li>"#, escape(name)))
        .collect();

    format!(
        r#"<section class="as-seen-on">
<h2>{}</h2>
<p class="section-subtitle">{}</p>
<ul class="press-logos">{}</ul>
</section>"#,
        escape(&env.i18n.t("as_seen_on.title")),
        escape(&env.i18n.t("as_seen_on.subtitle")),
        logos
    )
}
