//! Shared UI crate for Topic Quotes: catalog, form/dialog state, components and views.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod app_footer;
    mod app_header;
    mod quote_dialog;
    mod topic_form;

    pub use app_footer::AppFooter;
    pub use app_header::AppHeader;
    pub use quote_dialog::QuoteDialog;
    pub use topic_form::TopicForm;
}

mod theme;
pub use theme::{Theme, THEME_CSS_INLINE};
