use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::theme::Theme;

/// Takes 'content' and wraps the standard head and body around it.
pub fn page(title: &str, theme: &Theme, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html class="no-js" lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                style { (PreEscaped(theme.css())) }
                script src="assets/file-model.js" defer {}
            }
            body {
                (content)
            }
        }
    }
}
