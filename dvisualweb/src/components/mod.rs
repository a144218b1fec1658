//! The components module contains Maud "partials" and the pieces they are
//! styled with. They are not complete pages in themselves - complete pages
//! are stored in the views folder.
//!
//! The highest-level component is 'page', which provides the common head,
//! including the theme, for all views.

pub(crate) mod page;
pub(crate) mod theme;
