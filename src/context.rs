//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Shopping-list item count shown in the nav badge - read
    pub shopping_count: ReadSignal<Option<u32>>,
    /// Shopping-list item count shown in the nav badge - write
    set_shopping_count: WriteSignal<Option<u32>>,
}

impl PageContext {
    pub fn new(shopping_count: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>)) -> Self {
        Self {
            shopping_count: shopping_count.0,
            set_shopping_count: shopping_count.1,
        }
    }

    /// Update the nav badge after a server-confirmed mutation.
    pub fn set_shopping_count(&self, count: u32) {
        self.set_shopping_count.set(Some(count));
    }
}

pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
