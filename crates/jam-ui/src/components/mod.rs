//! Shared components used by the app shell and feature views.

pub(crate) mod bulk_action_bar;
pub(crate) mod checkbox;
pub(crate) mod loading;
pub(crate) mod pagination;
pub(crate) mod toast;

pub(crate) use bulk_action_bar::BulkActionBar;
pub(crate) use checkbox::Checkbox;
pub(crate) use loading::Loading;
pub(crate) use pagination::PaginationBar;
pub(crate) use toast::ToastHost;
