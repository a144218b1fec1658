//! The views module contains Maud templates that correspond to entire pages
//! or the main content of one. Views are constructed from partials, which are
//! contained in the components module.

pub(crate) mod upload;
