use std::sync::Arc;

use crate::config::Catalog;
use crate::pipeline::Evaluator;

#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<Evaluator>,
}

impl AppState {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.evaluator.catalog()
    }

    pub fn embedder_is_stub(&self) -> bool {
        self.evaluator.scorer().is_stub()
    }
}
