use std::{ops::Deref, sync::Arc};

use crate::{
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    fleet::FleetClient,
    store::BookStore,
};

/// State of the book service.
#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                books: BookStore::default(),
            }),
        }
    }

    pub fn books(&self) -> &BookStore {
        &self.inner.books
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    books: BookStore,
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}

/// State of the fleet service.
#[derive(Clone)]
pub struct FleetState {
    inner: Arc<FleetStateInner>,
}

impl FleetState {
    pub fn new(error_verbosity: ErrorVerbosity, client: FleetClient) -> Self {
        Self {
            inner: Arc::new(FleetStateInner {
                error_verbosity,
                client,
            }),
        }
    }

    pub fn client(&self) -> &FleetClient {
        &self.inner.client
    }
}

impl Deref for FleetState {
    type Target = FleetStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct FleetStateInner {
    error_verbosity: ErrorVerbosity,
    client: FleetClient,
}

impl ErrorVerbosityProvider for FleetState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}
