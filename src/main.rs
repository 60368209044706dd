#![allow(warnings)]
//! FridgeBuddy Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod context;
mod models;
mod notify;
mod pages;
mod state;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
