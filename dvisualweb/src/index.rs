use maud::Markup;

use crate::{
    components::{page::page, theme::Theme},
    views::upload::upload_view,
};

pub async fn index() -> Markup {
    page("dvisual", &Theme::default(), upload_view())
}
