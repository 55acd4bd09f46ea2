use crate::pages::html::escape;
use crate::pages::PageEnv;
use crate::routing::localized_path;

/// Body of the localized 404 page.
pub fn render(env: &PageEnv<'_>) -> String {
    format!(
        r#"<section class="not-found">
<h1>{}</h1>
<p>{}</p>
<a class="button button-primary" href="{}">{}</a>
</section>"#,
        escape(&env.i18n.t("not_found.title")),
        escape(&env.i18n.t("not_found.description")),
        localized_path(env.i18n.locale(), "/"),
        escape(&env.i18n.t("not_found.back_home")),
    )
}
