// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthorizationGuard;
use crate::store::InMemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub guard: Arc<AuthorizationGuard>,
}

impl AppState {
    pub fn new(store: InMemoryStore, guard: AuthorizationGuard) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            guard: Arc::new(guard),
        }
    }
}
