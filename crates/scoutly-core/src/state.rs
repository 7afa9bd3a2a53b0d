use crate::error::CoreError;
use crate::page::PageResult;

/// Observable lifecycle of one list view.
///
/// ```text
/// Idle ──submit──▶ Loading ──ok──▶ Success ──submit──▶ Loading
///                     │ ▲
///                   fail└─ submit (newer query supersedes)
///                     ▼
///                   Error ──submit / retry──▶ Loading
/// ```
///
/// `Loading` and `Error` keep the last good page so a view can go on
/// rendering it while a new request is in flight or after one failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading {
        previous: Option<PageResult<T>>,
    },
    Success(PageResult<T>),
    Error {
        error: CoreError,
        previous: Option<PageResult<T>>,
    },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The page to render: the fresh one on success, otherwise the last
    /// good page if there is one.
    pub fn data(&self) -> Option<&PageResult<T>> {
        match self {
            Self::Idle => None,
            Self::Success(page) => Some(page),
            Self::Loading { previous } | Self::Error { previous, .. } => previous.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&CoreError> {
        match self {
            Self::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    fn into_last_good(self) -> Option<PageResult<T>> {
        match self {
            Self::Idle => None,
            Self::Success(page) => Some(page),
            Self::Loading { previous } | Self::Error { previous, .. } => previous,
        }
    }

    pub(crate) fn begin_loading(&mut self) {
        let previous = std::mem::take(self).into_last_good();
        *self = Self::Loading { previous };
    }

    pub(crate) fn settle(&mut self, outcome: Result<PageResult<T>, CoreError>) {
        *self = match outcome {
            Ok(page) => Self::Success(page),
            Err(error) => Self::Error {
                error,
                previous: std::mem::take(self).into_last_good(),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scoutly_api::PaginationMeta;

    fn page(names: &[&str]) -> PageResult<String> {
        PageResult {
            items: names.iter().map(|n| (*n).to_owned()).collect(),
            pagination: PaginationMeta {
                page: 1,
                per_page: 20,
                total: names.len().try_into().unwrap_or_default(),
                total_pages: 1,
            },
        }
    }

    #[test]
    fn loading_keeps_last_good_page() {
        let mut state = FetchState::Success(page(&["Haaland"]));
        state.begin_loading();

        assert!(state.is_loading());
        assert_eq!(state.data(), Some(&page(&["Haaland"])));
    }

    #[test]
    fn failure_keeps_last_good_page() {
        let mut state = FetchState::Success(page(&["Haaland"]));
        state.begin_loading();
        state.settle(Err(CoreError::Timeout));

        assert_eq!(state.error(), Some(&CoreError::Timeout));
        assert_eq!(state.data(), Some(&page(&["Haaland"])));
    }

    #[test]
    fn superseding_load_carries_page_forward() {
        let mut state = FetchState::Success(page(&["Haaland"]));
        state.begin_loading();
        state.begin_loading();
        assert_eq!(state.data(), Some(&page(&["Haaland"])));
    }

    #[test]
    fn first_load_has_nothing_to_show() {
        let mut state: FetchState<String> = FetchState::default();
        assert!(state.is_idle());
        state.begin_loading();
        assert_eq!(state, FetchState::Loading { previous: None });
    }

    #[test]
    fn success_replaces_error() {
        let mut state: FetchState<String> = FetchState::Error {
            error: CoreError::Unauthorized,
            previous: None,
        };
        state.begin_loading();
        state.settle(Ok(page(&["Salah"])));
        assert_eq!(state, FetchState::Success(page(&["Salah"])));
        assert!(state.error().is_none());
    }
}
