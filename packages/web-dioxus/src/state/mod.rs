//! Client-side state: the query cache, generator workflows, filter
//! selections, and toast notifications.

mod cache;
mod filters;
mod hooks;
mod toasts;
mod workflow;

pub use cache::{QueryCache, QueryKey, QueryView};
pub use filters::{
    BlogLength, BlogTone, ContentLibraryFilters, GeneratorFilters, SocialTone,
    TitleLibraryFilters, TITLE_COUNT_OPTIONS,
};
pub use hooks::{use_query_cache, QueryCacheHandle, QueryCacheProvider};
pub use toasts::{use_toasts, Toast, ToastKind, ToastProvider, ToastState};
pub use workflow::{DraftFlow, GenerationPhase, SaveReport, TitleFlow, WorkflowError};
