#![allow(warnings)]
//! Kanban Board Frontend Entry Point

mod models;
mod sorts;
mod placeholder;
mod dnd;
mod reconcile;
mod commands;
mod context;
mod store;
mod components;
mod app;

#[cfg(test)]
mod fixtures;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
